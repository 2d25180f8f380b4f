//! Pure aggregation over a transaction collection. Stateless: callers hand
//! in the current snapshot and get display figures back.

use super::category::Category;
use super::transaction::{Transaction, TransactionKind};

/// Summary figures derived from a transaction collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub expenses_by_category: Vec<CategoryTotal>,
}

impl Totals {
    /// The defined base case for an empty collection.
    pub fn zero() -> Self {
        Self {
            total_income: 0.0,
            total_expenses: 0.0,
            balance: 0.0,
            expenses_by_category: Vec::new(),
        }
    }
}

/// One slice of the expense breakdown, ready for chart rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: Category,
    pub total: f64,
    pub color: &'static str,
    pub percentage: u32,
}

/// Total income minus total expenses over the given transactions.
pub fn balance(transactions: &[Transaction]) -> f64 {
    transactions.iter().fold(0.0, |acc, txn| match txn.kind {
        TransactionKind::Income => acc + txn.amount,
        TransactionKind::Expense => acc - txn.amount,
    })
}

/// Computes income/expense totals, the balance, and the per-category expense
/// breakdown.
///
/// Breakdown entries are sorted by descending total; ties keep the fixed
/// enumeration order. Each percentage is rounded independently, so the column
/// may not sum to exactly 100. Renormalizing would change figures callers
/// already display, so the rounding is kept as is.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut per_category = [0.0f64; Category::ALL.len()];

    for txn in transactions {
        match txn.kind {
            TransactionKind::Income => total_income += txn.amount,
            TransactionKind::Expense => {
                total_expenses += txn.amount;
                per_category[txn.category_or_default().index()] += txn.amount;
            }
        }
    }

    let mut expenses_by_category: Vec<CategoryTotal> = Category::ALL
        .iter()
        .filter(|category| per_category[category.index()] > 0.0)
        .map(|&category| {
            let total = per_category[category.index()];
            let percentage = if total_expenses > 0.0 {
                (total / total_expenses * 100.0).round() as u32
            } else {
                0
            };
            CategoryTotal {
                name: category,
                total,
                color: category.color(),
                percentage,
            }
        })
        .collect();
    // Stable sort keeps enumeration order for equal totals.
    expenses_by_category.sort_by(|a, b| b.total.total_cmp(&a.total));

    Totals {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        expenses_by_category,
    }
}
