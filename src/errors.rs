use thiserror::Error;

/// Error type that captures ledger validation, business-rule, and
/// persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid amount: {0} (must be a positive number)")]
    InvalidAmount(f64),
    #[error("missing category: expense transactions require one")]
    MissingCategory,
    #[error("invalid threshold: {0} (must be non-negative)")]
    InvalidThreshold(f64),
    #[error(
        "balance_below_threshold: spending {amount} from balance {balance} \
         would fall below threshold {threshold}"
    )]
    BalanceBelowThreshold {
        balance: f64,
        amount: f64,
        threshold: f64,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    /// True for structurally invalid caller input, as opposed to a
    /// business-rule rejection or a storage failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::MissingCategory | Self::InvalidThreshold(_)
        )
    }
}
