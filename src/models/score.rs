use serde::{Deserialize, Serialize};

use crate::models::Receipt;

/// 计分结果 (ScoreResult)
/// breakdown 按规则固定顺序逐行说明每条规则的贡献
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub points: i64,
    pub breakdown: Vec<String>,
}

impl ScoreResult {
    /// 拼接为多行文本, 供存储与响应使用
    pub fn breakdown_text(&self) -> String {
        self.breakdown.join("\n")
    }
}

/// 存储记录 - 小票及其计分结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredReceipt {
    pub receipt: Receipt,
    pub points: i64,
    pub breakdown: String,
}
