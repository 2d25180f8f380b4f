//! Ledger domain models, the canonical store, and aggregation helpers.

pub mod aggregate;
pub mod category;
pub mod store;
pub mod transaction;

pub use aggregate::{compute_totals, CategoryTotal, Totals};
pub use category::Category;
pub use store::{LedgerSnapshot, LedgerStore};
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
