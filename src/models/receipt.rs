use serde::{Deserialize, Serialize};

/// 小票 (Receipt) - 请求体结构, 线上字段为 camelCase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // YYYY-MM-DD
    pub purchase_time: String, // HH:MM (24小时制)
    pub total: String,         // 十进制字符串金额
    pub items: Vec<ReceiptItem>,
}

/// 小票明细行 (ReceiptItem)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub short_description: String,
    pub price: String, // 十进制字符串金额
}
