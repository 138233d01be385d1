use crate::models::{Receipt, ScoredReceipt};
use crate::service::calculate_points;
use crate::storage::ReceiptStore;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// 响应体: 生成的小票 ID
#[derive(Debug, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: String,
}

/// 响应体: 积分查询结果
#[derive(Debug, Serialize)]
pub struct GetPointsResponse {
    pub total_points: i64,
    pub breakdown: String,
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 计分接口: 对请求体中的小票计分并存储, 返回生成的 ID
/// 请求体不是合法的 Receipt 结构时由 Json 提取器直接拒绝, 不会进入计分逻辑
pub async fn process_receipt(
    State(store): State<Arc<dyn ReceiptStore>>,
    Json(receipt): Json<Receipt>,
) -> Response {
    let result = calculate_points(&receipt);
    let receipt_id = Uuid::new_v4().to_string();

    tracing::info!(
        "Receipt {} ({}) scored: {} points",
        receipt_id,
        receipt.retailer,
        result.points
    );

    store.insert(
        receipt_id.clone(),
        ScoredReceipt {
            receipt,
            points: result.points,
            breakdown: result.breakdown_text(),
        },
    );

    (StatusCode::OK, Json(ProcessReceiptResponse { id: receipt_id })).into_response()
}

/// 积分查询接口: 按 ID 返回积分与逐行说明
pub async fn get_points(
    State(store): State<Arc<dyn ReceiptStore>>,
    Path(receipt_id): Path<String>,
) -> Response {
    match store.get(&receipt_id) {
        Some(record) => {
            let response = GetPointsResponse {
                total_points: record.points,
                breakdown: record.breakdown,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        None => {
            tracing::warn!("Receipt {} not found", receipt_id);
            let response = ErrorResponse {
                success: false,
                message: format!("No receipt found for id {}", receipt_id),
            };
            (StatusCode::NOT_FOUND, Json(response)).into_response()
        }
    }
}
