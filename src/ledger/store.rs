use uuid::Uuid;

use crate::errors::LedgerError;
use crate::storage::{StorageAdapter, THRESHOLD_KEY, TRANSACTIONS_KEY};

use super::aggregate::{self, Totals};
use super::transaction::{Transaction, TransactionDraft, TransactionKind};

/// Read-only copy of the current ledger state handed to callers.
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    pub transactions: Vec<Transaction>,
    pub threshold: f64,
}

/// Owns the canonical transaction collection and the minimum-balance
/// threshold, and enforces the admission invariant on expenses.
///
/// All mutation flows through `&mut self`, so the threshold check and the
/// insertion in [`add_transaction`](Self::add_transaction) cannot interleave
/// with another mutation. Persistence is a best-effort side effect after the
/// in-memory change commits: write failures are logged, never rolled back.
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    threshold: f64,
    storage: Box<dyn StorageAdapter>,
}

impl LedgerStore {
    /// Empty ledger over the given adapter. Call
    /// [`initialize`](Self::initialize) to hydrate persisted state, or use
    /// [`open`](Self::open).
    pub fn new(storage: Box<dyn StorageAdapter>) -> Self {
        Self {
            transactions: Vec::new(),
            threshold: 0.0,
            storage,
        }
    }

    /// Creates a ledger and hydrates it from the adapter in one step.
    pub fn open(storage: Box<dyn StorageAdapter>) -> Self {
        let mut store = Self::new(storage);
        store.initialize();
        store
    }

    /// Hydrates transactions and threshold from the adapter. Fails soft: a
    /// read error or malformed payload leaves the defaults in place and logs
    /// a warning, keeping the session in-memory-only rather than failing.
    pub fn initialize(&mut self) {
        match self.storage.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(stored) => self.transactions = stored,
                Err(err) => {
                    tracing::warn!(%err, "discarding malformed stored transactions")
                }
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "unable to read stored transactions"),
        }
        match self.storage.get(THRESHOLD_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => self.threshold = value,
                Ok(value) => tracing::warn!(value, "ignoring invalid stored threshold"),
                Err(err) => tracing::warn!(%err, "discarding malformed stored threshold"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "unable to read stored threshold"),
        }
        tracing::debug!(
            transactions = self.transactions.len(),
            threshold = self.threshold,
            "ledger hydrated"
        );
    }

    /// Validates the draft, enforces the minimum-balance invariant for
    /// expenses, and prepends the new transaction (newest-first). Returns the
    /// created transaction. On rejection nothing is mutated.
    pub fn add_transaction(
        &mut self,
        draft: TransactionDraft,
    ) -> Result<Transaction, LedgerError> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(draft.amount));
        }
        if draft.kind == TransactionKind::Expense {
            if draft.category.is_none() {
                return Err(LedgerError::MissingCategory);
            }
            let balance = aggregate::balance(&self.transactions);
            if balance - draft.amount < self.threshold {
                return Err(LedgerError::BalanceBelowThreshold {
                    balance,
                    amount: draft.amount,
                    threshold: self.threshold,
                });
            }
        }

        let transaction = Transaction::from_draft(draft);
        self.transactions.insert(0, transaction.clone());
        self.persist_transactions();
        Ok(transaction)
    }

    /// Removes the transaction with the matching id. A missing id is a
    /// no-op, not an error; returns whether anything was removed.
    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            self.persist_transactions();
        }
        removed
    }

    /// Replaces the minimum-balance threshold. Past admission decisions are
    /// not revisited.
    pub fn set_threshold(&mut self, value: f64) -> Result<(), LedgerError> {
        if !value.is_finite() || value < 0.0 {
            return Err(LedgerError::InvalidThreshold(value));
        }
        self.threshold = value;
        if let Err(err) = self.storage.set(THRESHOLD_KEY, &value.to_string()) {
            tracing::warn!(%err, "failed to persist threshold");
        }
        Ok(())
    }

    /// Empties the collection, resets the threshold to 0, and erases the
    /// persisted copies. Irreversible; callers gate this behind their own
    /// confirmation flow.
    pub fn clear_all_data(&mut self) {
        self.transactions.clear();
        self.threshold = 0.0;
        for key in [TRANSACTIONS_KEY, THRESHOLD_KEY] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key, %err, "failed to erase stored data");
            }
        }
    }

    /// Copies out the current state; callers never get a mutable handle into
    /// the store's own collection.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            transactions: self.transactions.clone(),
            threshold: self.threshold,
        }
    }

    /// Current transactions in stored (newest-first) order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Convenience for callers rendering the dashboard.
    pub fn totals(&self) -> Totals {
        aggregate::compute_totals(&self.transactions)
    }

    fn persist_transactions(&self) {
        let json = match serde_json::to_string(&self.transactions) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize transactions");
                return;
            }
        };
        if let Err(err) = self.storage.set(TRANSACTIONS_KEY, &json) {
            tracing::warn!(%err, "failed to persist transactions");
        }
    }
}
