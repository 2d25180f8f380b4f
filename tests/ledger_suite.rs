use chrono::NaiveDate;
use finance_core::{
    errors::LedgerError,
    ledger::{compute_totals, Category, LedgerStore, TransactionDraft},
    storage::{MemoryStorage, Result as StorageResult, StorageAdapter},
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
}

fn memory_store() -> LedgerStore {
    LedgerStore::new(Box::new(MemoryStorage::new()))
}

#[test]
fn guardrail_scenario_end_to_end() {
    let mut store = memory_store();
    store.set_threshold(50.0).expect("valid threshold");

    store
        .add_transaction(TransactionDraft::income(200.0, "salary", date()))
        .expect("income is always admitted");
    assert_eq!(store.totals().balance, 200.0);

    store
        .add_transaction(TransactionDraft::expense(
            100.0,
            Category::Food,
            "groceries",
            date(),
        ))
        .expect("100 spent from 200 stays above 50");
    assert_eq!(store.totals().balance, 100.0);

    let err = store
        .add_transaction(TransactionDraft::expense(
            60.0,
            Category::Internet,
            "fiber plan",
            date(),
        ))
        .expect_err("100 - 60 = 40 falls below threshold 50");
    assert!(matches!(err, LedgerError::BalanceBelowThreshold { .. }));
    assert_eq!(store.totals().balance, 100.0);

    let totals = store.totals();
    assert_eq!(totals.total_income, 200.0);
    assert_eq!(totals.total_expenses, 100.0);
    assert_eq!(totals.expenses_by_category.len(), 1);
    let food = &totals.expenses_by_category[0];
    assert_eq!(food.name, Category::Food);
    assert_eq!(food.total, 100.0);
    assert_eq!(food.percentage, 100);
}

#[test]
fn balance_tracks_adds_and_deletes_exactly() {
    let mut store = memory_store();
    let salary = store
        .add_transaction(TransactionDraft::income(300.0, "salary", date()))
        .unwrap();
    store
        .add_transaction(TransactionDraft::income(50.0, "gift", date()))
        .unwrap();
    store
        .add_transaction(TransactionDraft::expense(
            80.0,
            Category::Clothing,
            "jacket",
            date(),
        ))
        .unwrap();
    assert_eq!(store.totals().balance, 270.0);

    store.delete_transaction(salary.id);
    let totals = compute_totals(store.transactions());
    assert_eq!(totals.total_income, 50.0);
    assert_eq!(totals.total_expenses, 80.0);
    assert_eq!(totals.balance, -30.0);
}

#[test]
fn clear_yields_the_all_zero_result() {
    let mut store = memory_store();
    store.set_threshold(10.0).unwrap();
    store
        .add_transaction(TransactionDraft::income(500.0, "bonus", date()))
        .unwrap();
    store
        .add_transaction(TransactionDraft::expense(
            20.0,
            Category::Entertainment,
            "cinema",
            date(),
        ))
        .unwrap();

    store.clear_all_data();

    let snapshot = store.snapshot();
    assert!(snapshot.transactions.is_empty());
    assert_eq!(snapshot.threshold, 0.0);
    let totals = compute_totals(&snapshot.transactions);
    assert_eq!(totals.total_income, 0.0);
    assert_eq!(totals.total_expenses, 0.0);
    assert_eq!(totals.balance, 0.0);
    assert!(totals.expenses_by_category.is_empty());
}

/// Adapter whose every operation fails, standing in for an unavailable
/// platform backend.
struct BrokenStorage;

impl StorageAdapter for BrokenStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "storage offline").into())
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "storage offline").into())
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "storage offline").into())
    }
}

#[test]
fn broken_storage_degrades_to_in_memory_session() {
    let mut store = LedgerStore::open(Box::new(BrokenStorage));
    assert!(store.transactions().is_empty());

    store
        .add_transaction(TransactionDraft::income(75.0, "cash", date()))
        .expect("persistence failure must not surface");
    store.set_threshold(5.0).expect("threshold still applies");
    let pharmacy = store
        .add_transaction(TransactionDraft::expense(
            40.0,
            Category::Medicine,
            "pharmacy",
            date(),
        ))
        .expect("in-memory state remains authoritative");
    assert_eq!(store.totals().balance, 35.0);

    assert!(store.delete_transaction(pharmacy.id));
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.totals().balance, 75.0);

    store.clear_all_data();
    assert!(store.transactions().is_empty());
    assert_eq!(store.threshold(), 0.0);
}
