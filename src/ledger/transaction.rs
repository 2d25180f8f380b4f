use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A single recorded financial event. Immutable once created; the ledger
/// only ever creates and deletes whole transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Mints a transaction from a validated draft, assigning a fresh id.
    /// Income drafts drop any supplied category.
    pub(crate) fn from_draft(draft: TransactionDraft) -> Self {
        let category = match draft.kind {
            TransactionKind::Expense => draft.category,
            TransactionKind::Income => None,
        };
        Self {
            id: Uuid::new_v4(),
            amount: draft.amount,
            kind: draft.kind,
            category,
            description: draft.description,
            date: draft.date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Effective category for aggregation: persisted expenses lacking one
    /// count as `Others`.
    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or(Category::Others)
    }
}

/// Supported transaction directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Caller-supplied input to [`LedgerStore::add_transaction`]; everything a
/// transaction carries except the store-assigned id.
///
/// [`LedgerStore::add_transaction`]: super::store::LedgerStore::add_transaction
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Option<Category>,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn income(amount: f64, description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            kind: TransactionKind::Income,
            category: None,
            description: description.into(),
            date,
        }
    }

    pub fn expense(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            kind: TransactionKind::Expense,
            category: Some(category),
            description: description.into(),
            date,
        }
    }
}
