pub mod memory;

pub use memory::MemoryReceiptStore;

use crate::models::ScoredReceipt;

/// 小票存储抽象 (键值接口)
/// 由 HTTP 层注入, 核心计分逻辑不依赖任何具体存储实现
pub trait ReceiptStore: Send + Sync {
    /// 以生成的小票 ID 为键保存计分记录
    fn insert(&self, receipt_id: String, record: ScoredReceipt);

    /// 按 ID 查询计分记录
    fn get(&self, receipt_id: &str) -> Option<ScoredReceipt>;
}
