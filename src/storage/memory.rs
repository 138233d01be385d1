use dashmap::DashMap;

use crate::models::ScoredReceipt;
use crate::storage::ReceiptStore;

/// 进程内存储 - DashMap 支持并发读写, 无需外层加锁
/// 仅在进程生命周期内有效, 重启即清空
pub struct MemoryReceiptStore {
    receipts: DashMap<String, ScoredReceipt>,
}

impl MemoryReceiptStore {
    pub fn new() -> Self {
        Self {
            receipts: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }
}

impl Default for MemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for MemoryReceiptStore {
    fn insert(&self, receipt_id: String, record: ScoredReceipt) {
        self.receipts.insert(receipt_id, record);
    }

    fn get(&self, receipt_id: &str) -> Option<ScoredReceipt> {
        self.receipts.get(receipt_id).map(|r| r.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Receipt, ScoredReceipt};

    fn record(points: i64) -> ScoredReceipt {
        ScoredReceipt {
            receipt: Receipt {
                retailer: "Target".to_string(),
                purchase_date: "2022-01-01".to_string(),
                purchase_time: "13:01".to_string(),
                total: "35.35".to_string(),
                items: Vec::new(),
            },
            points,
            breakdown: String::new(),
        }
    }

    #[test]
    fn insert_then_get_returns_stored_record() {
        let store = MemoryReceiptStore::new();
        assert!(store.is_empty());

        store.insert("id-1".to_string(), record(28));
        assert_eq!(store.len(), 1);

        let found = store.get("id-1").expect("record should exist");
        assert_eq!(found.points, 28);
        assert_eq!(found.receipt.retailer, "Target");
    }

    #[test]
    fn get_unknown_id_returns_none() {
        let store = MemoryReceiptStore::new();
        store.insert("id-1".to_string(), record(28));
        assert!(store.get("id-2").is_none());
    }

    #[test]
    fn insert_with_same_id_overwrites() {
        let store = MemoryReceiptStore::new();
        store.insert("id-1".to_string(), record(28));
        store.insert("id-1".to_string(), record(109));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("id-1").map(|r| r.points), Some(109));
    }
}
