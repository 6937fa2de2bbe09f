//! Integration tests for the store crate.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal_macros::dec;
use std::fs;
use stockledger_core::{Purchase, Sale};
use stockledger_store::{Clock, LedgerStore, StoreConfig, StoreError};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn initialized_store() -> (TempDir, LedgerStore) {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let store = LedgerStore::from_config(&StoreConfig::new(dir.path()));
    store.ensure_initialized().expect("should initialize stores");
    (dir, store)
}

// ============================================================================
// Ledger store
// ============================================================================

#[test]
fn test_ensure_initialized_writes_headers() {
    let (_dir, store) = initialized_store();

    let bought = fs::read_to_string(store.bought_path()).unwrap();
    let sold = fs::read_to_string(store.sold_path()).unwrap();
    assert_eq!(bought, "id,product_name,buy_date,buy_price,expiration_date\n");
    assert_eq!(sold, "id,product_name,bought_id,sell_date,sell_price\n");

    assert!(store.load_purchases().unwrap().is_empty());
    assert!(store.load_all_sales().unwrap().is_empty());
}

#[test]
fn test_ensure_initialized_does_not_truncate() {
    let (_dir, store) = initialized_store();
    let purchase = Purchase::new(1, "Apples", date(2024, 1, 1), dec!(1.50), date(2024, 6, 1));
    store.append_purchase(&purchase).unwrap();

    store.ensure_initialized().unwrap();

    assert_eq!(store.load_purchases().unwrap(), vec![purchase]);
}

#[test]
fn test_purchase_round_trip() {
    let (_dir, store) = initialized_store();
    let purchase = Purchase::new(1, "Apples", date(2024, 1, 1), dec!(1.50), date(2024, 6, 1));

    store.append_purchase(&purchase).unwrap();

    let loaded = store.load_purchases().unwrap();
    assert_eq!(loaded, vec![purchase]);
    // Scale survives the trip through the file.
    assert_eq!(loaded[0].buy_price.to_string(), "1.50");
    assert_eq!(
        fs::read_to_string(store.bought_path()).unwrap().lines().nth(1),
        Some("1,Apples,2024-01-01,1.50,2024-06-01")
    );
}

#[test]
fn test_sale_round_trip_preserves_order() {
    let (_dir, store) = initialized_store();
    let sales = vec![
        Sale::new(1, "Pens", 1, date(2024, 1, 3), dec!(3.00)),
        Sale::new(2, "Ink, black", 2, date(2024, 1, 2), dec!(7.25)),
    ];
    for sale in &sales {
        store.append_sale(sale).unwrap();
    }

    assert_eq!(store.load_all_sales().unwrap(), sales);
}

#[test]
fn test_load_all_purchases_groups_batches() {
    let (_dir, store) = initialized_store();
    store
        .append_purchase(&Purchase::new(
            1,
            "Apples",
            date(2024, 1, 1),
            dec!(1.50),
            date(2024, 6, 1),
        ))
        .unwrap();
    store
        .append_purchase(&Purchase::new(2, "Pens", date(2024, 1, 1), dec!(1.00), date(2030, 1, 1)))
        .unwrap();
    store
        .append_purchase(&Purchase::new(
            3,
            "Apples",
            date(2024, 1, 2),
            dec!(1.40),
            date(2024, 6, 2),
        ))
        .unwrap();

    let by_product = store.load_all_purchases().unwrap();
    let apples: Vec<u64> = by_product["Apples"].iter().map(|p| p.id).collect();
    assert_eq!(apples, vec![1, 3]);
    assert_eq!(by_product["Pens"].len(), 1);
}

#[test]
fn test_load_ledger() {
    let (_dir, store) = initialized_store();
    store
        .append_purchase(&Purchase::new(1, "Pens", date(2024, 1, 1), dec!(1.00), date(2030, 1, 1)))
        .unwrap();
    store
        .append_sale(&Sale::new(1, "Pens", 1, date(2024, 1, 2), dec!(3.00)))
        .unwrap();

    let ledger = store.load_ledger().unwrap();
    assert_eq!(ledger.next_purchase_id(), 2);
    assert_eq!(ledger.next_sale_id(), 2);
    let totals = ledger.revenue_and_profit(date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(totals.revenue, dec!(3.00));
    assert_eq!(totals.profit, dec!(2.00));
}

#[test]
fn test_columns_may_be_reordered() {
    let (_dir, store) = initialized_store();
    fs::write(
        store.bought_path(),
        "product_name,id,expiration_date,buy_date,buy_price\nApples,4,2024-06-01,2024-01-01,1.50\n",
    )
    .unwrap();

    let loaded = store.load_purchases().unwrap();
    assert_eq!(
        loaded,
        vec![Purchase::new(4, "Apples", date(2024, 1, 1), dec!(1.50), date(2024, 6, 1))]
    );
}

#[test]
fn test_missing_columns() {
    let (_dir, store) = initialized_store();
    fs::write(store.bought_path(), "id,product_name,buy_date\n1,Apples,2024-01-01\n").unwrap();

    let err = store.load_purchases().unwrap_err();
    match err {
        StoreError::MissingColumns { missing, .. } => {
            assert_eq!(missing, vec!["buy_price", "expiration_date"]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_empty_file_is_missing_columns() {
    let (_dir, store) = initialized_store();
    fs::write(store.sold_path(), "").unwrap();

    assert!(matches!(
        store.load_all_sales(),
        Err(StoreError::MissingColumns { .. })
    ));
}

#[test]
fn test_malformed_row() {
    let (_dir, store) = initialized_store();
    fs::write(
        store.bought_path(),
        "id,product_name,buy_date,buy_price,expiration_date\n1,Apples,yesterday,1.50,2024-06-01\n",
    )
    .unwrap();

    let err = store.load_purchases().unwrap_err();
    assert!(matches!(err, StoreError::Csv { .. }));
    assert!(err.to_string().contains("bought.csv"));
}

#[test]
fn test_missing_store_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = LedgerStore::from_config(&StoreConfig::new(dir.path()));

    assert!(matches!(
        store.load_purchases(),
        Err(StoreError::Read { .. })
    ));
    let purchase = Purchase::new(1, "Apples", date(2024, 1, 1), dec!(1.50), date(2024, 6, 1));
    assert!(matches!(
        store.append_purchase(&purchase),
        Err(StoreError::Write { .. })
    ));
}

// ============================================================================
// Clock
// ============================================================================

#[test]
fn test_clock_initializes_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path());
    let clock = Clock::with_today(config.current_day_path(), date(2024, 3, 15));

    assert!(!config.current_day_path().exists());
    assert_eq!(clock.get_current_day().unwrap(), date(2024, 3, 15));
    assert_eq!(
        fs::read_to_string(config.current_day_path()).unwrap(),
        "2024-03-15"
    );
}

#[test]
fn test_clock_uses_local_date_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Clock::from_config(&StoreConfig::new(dir.path()));

    let before = chrono::Local::now().date_naive();
    let day = clock.get_current_day().unwrap();
    let after = chrono::Local::now().date_naive();
    assert!(day >= before && day <= after);
}

#[test]
fn test_clock_get_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Clock::with_today(dir.path().join("current_day.txt"), date(2024, 3, 15));

    let first = clock.get_current_day().unwrap();
    let second = clock.get_current_day().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_clock_existing_file_wins_over_today() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("current_day.txt");
    fs::write(&path, "2023-12-31\n").unwrap();

    let clock = Clock::with_today(&path, date(2024, 3, 15));
    assert_eq!(clock.get_current_day().unwrap(), date(2023, 12, 31));
}

#[test]
fn test_clock_set_and_advance() {
    let dir = tempfile::tempdir().unwrap();
    let clock = Clock::with_today(dir.path().join("current_day.txt"), date(2024, 3, 15));

    clock.set_current_day(date(2024, 1, 1)).unwrap();
    assert_eq!(clock.get_current_day().unwrap(), date(2024, 1, 1));

    assert_eq!(clock.advance_time(31).unwrap(), date(2024, 2, 1));
    assert_eq!(clock.advance_time(-1).unwrap(), date(2024, 1, 31));
    assert_eq!(clock.get_current_day().unwrap(), date(2024, 1, 31));
}

#[test]
fn test_clock_invalid_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("current_day.txt");
    fs::write(&path, "not a date").unwrap();

    let err = Clock::new(&path).get_current_day().unwrap_err();
    match err {
        StoreError::InvalidDay { value, .. } => assert_eq!(value, "not a date"),
        other => panic!("expected InvalidDay, got {other:?}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Advancing by a then b lands on the same day as advancing by a + b.
    #[test]
    fn prop_advance_time_is_additive(a in -400i64..400, b in -400i64..400) {
        let dir = tempfile::tempdir().unwrap();
        let start = date(2024, 1, 1);

        let stepwise = Clock::with_today(dir.path().join("stepwise.txt"), start);
        stepwise.advance_time(a).unwrap();
        let split = stepwise.advance_time(b).unwrap();

        let once = Clock::with_today(dir.path().join("once.txt"), start);
        let whole = once.advance_time(a + b).unwrap();

        prop_assert_eq!(split, whole);
    }
}
