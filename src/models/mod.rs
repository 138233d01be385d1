pub mod receipt;
pub mod score;

pub use receipt::{Receipt, ReceiptItem};
pub use score::{ScoreResult, ScoredReceipt};
