//! Integration tests for settlement-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use settlement_core::{
    compute_balances, group_debts_from_expenses, patterns, simplify_debts,
    utils::{EnhancedExpenseValidator, MemoryStore},
    BalanceMap, Expense, ExpenseBuilder, Member, SettlementEngine, SettlementError, Split,
    Transfer,
};
use std::str::FromStr;

fn expense(id: &str, group_id: &str, payer: &str, splits: &[(&str, i64)]) -> Expense {
    let amount: i64 = splits.iter().map(|(_, share)| share).sum();
    Expense::new(
        id.to_string(),
        format!("Expense {id}"),
        BigDecimal::from(amount),
        group_id.to_string(),
        payer.to_string(),
        splits
            .iter()
            .map(|(member, share)| Split::new(*member, BigDecimal::from(*share)))
            .collect(),
    )
}

#[tokio::test]
async fn test_complete_settlement_workflow() {
    let mut store = MemoryStore::new();
    store.add_member(Member::new("alice", "Alice"));
    store.add_member(Member::new("bob", "Bob"));
    store.add_member(Member::new("carol", "Carol"));

    let mut engine = SettlementEngine::new(store.clone());

    // A weekend trip: alice fronts the hotel, bob the dinner, carol the taxi
    engine
        .record_expense(expense(
            "hotel",
            "trip",
            "alice",
            &[("alice", 100), ("bob", 100), ("carol", 100)],
        ))
        .await
        .unwrap();
    engine
        .record_expense(expense(
            "dinner",
            "trip",
            "bob",
            &[("alice", 30), ("bob", 30), ("carol", 30)],
        ))
        .await
        .unwrap();
    engine
        .record_expense(expense(
            "taxi",
            "trip",
            "carol",
            &[("alice", 20), ("bob", 20), ("carol", 20)],
        ))
        .await
        .unwrap();

    // Net positions: paid minus owed
    let balances = engine.group_balances("trip").await.unwrap();
    assert_eq!(balances["alice"], BigDecimal::from(150));
    assert_eq!(balances["bob"], BigDecimal::from(-60));
    assert_eq!(balances["carol"], BigDecimal::from(-90));

    // Ledger integrity holds
    let report = engine.validate_group_ledger("trip").await.unwrap();
    assert!(report.is_valid);
    assert_eq!(report.net_total, BigDecimal::from(0));

    // Two transfers settle three people
    let transfers = engine.group_debts("trip").await.unwrap();
    assert_eq!(
        transfers,
        vec![
            Transfer::new("carol", "alice", BigDecimal::from(90)),
            Transfer::new("bob", "alice", BigDecimal::from(60)),
        ]
    );

    // Labeled output for the presentation surface
    let labeled = engine.labeled_group_debts("trip", &store).await.unwrap();
    assert_eq!(labeled[0].from, "Carol");
    assert_eq!(labeled[0].to, "Alice");
    assert_eq!(labeled[1].from, "Bob");

    // Applying the transfers settles every balance
    let mut remaining = balances.clone();
    for t in &transfers {
        *remaining.get_mut(&t.from).unwrap() += &t.amount;
        *remaining.get_mut(&t.to).unwrap() -= &t.amount;
    }
    assert!(remaining.values().all(|b| *b == BigDecimal::from(0)));
}

#[tokio::test]
async fn test_settle_up_payments_close_the_group() {
    let store = MemoryStore::new();
    let mut engine = SettlementEngine::new(store);

    engine
        .record_expense(expense("e1", "flat", "alice", &[("bob", 75), ("carol", 25)]))
        .await
        .unwrap();

    let transfers = engine.group_debts("flat").await.unwrap();
    assert_eq!(transfers.len(), 2);

    // Record each computed transfer as a settlement payment
    for t in &transfers {
        let payment =
            patterns::settlement_payment("flat", t.from.clone(), t.to.clone(), t.amount.clone())
                .unwrap();
        engine.record_expense(payment).await.unwrap();
    }

    // Everyone is square now
    let transfers = engine.group_debts("flat").await.unwrap();
    assert!(transfers.is_empty());

    // Settlement payments don't show up as spending
    let by_category = engine.group_spending_by_category("flat").await.unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category["General"], BigDecimal::from(100));
}

#[tokio::test]
async fn test_member_spending_summary() {
    let store = MemoryStore::new();
    let mut engine = SettlementEngine::new(store);

    let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let february = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();

    let groceries = ExpenseBuilder::new("Groceries", BigDecimal::from(60), "flat", "alice")
        .id("groceries")
        .date(march)
        .split("alice", BigDecimal::from(30))
        .split("bob", BigDecimal::from(30))
        .build()
        .unwrap();
    let rent = ExpenseBuilder::new("Rent", BigDecimal::from(1000), "flat", "bob")
        .id("rent")
        .date(february)
        .split("alice", BigDecimal::from(500))
        .split("bob", BigDecimal::from(500))
        .build()
        .unwrap();

    engine.record_expense(groceries).await.unwrap();
    engine.record_expense(rent).await.unwrap();

    let summary = engine
        .member_spending("alice", NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
        .await
        .unwrap();

    assert_eq!(summary.total_spent, BigDecimal::from(530));
    assert_eq!(summary.monthly_spent, BigDecimal::from(30));
    assert_eq!(summary.expense_count, 2);
}

#[tokio::test]
async fn test_enhanced_validator_in_engine() {
    let store = MemoryStore::new();
    let mut engine = SettlementEngine::with_validator(store, Box::new(EnhancedExpenseValidator));

    let duplicate_splits = expense("e1", "trip", "alice", &[("bob", 30), ("bob", 30)]);
    let result = engine.record_expense(duplicate_splits).await;
    assert!(matches!(result, Err(SettlementError::Validation(_))));

    let fine = expense("e2", "trip", "alice", &[("alice", 30), ("bob", 30)]);
    engine.record_expense(fine).await.unwrap();
}

#[test]
fn test_spec_two_person_scenario() {
    let expenses = vec![expense("e1", "g", "A", &[("A", 50), ("B", 50)])];

    let balances = compute_balances(&expenses);
    assert_eq!(balances["A"], BigDecimal::from(50));
    assert_eq!(balances["B"], BigDecimal::from(-50));

    let transfers = group_debts_from_expenses(&expenses).unwrap();
    assert_eq!(transfers, vec![Transfer::new("B", "A", BigDecimal::from(50))]);
}

#[test]
fn test_simplification_is_deterministic_across_ledger_orderings() {
    let mut expenses = vec![
        expense("e1", "g", "A", &[("B", 60), ("C", 40)]),
        expense("e2", "g", "B", &[("A", 10), ("C", 20)]),
        expense("e3", "g", "C", &[("A", 25), ("B", 50)]),
    ];

    let forward = group_debts_from_expenses(&expenses).unwrap();
    expenses.reverse();
    let backward = group_debts_from_expenses(&expenses).unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn test_fractional_ledger_settles_within_one_unit() {
    // A 100-unit bill divided three ways upstream, with thirds kept as
    // fractional minor units.
    let third = BigDecimal::from_str("33.333").unwrap();
    let expenses = vec![Expense::new(
        "e1".to_string(),
        "Bill".to_string(),
        BigDecimal::from_str("99.999").unwrap(),
        "g".to_string(),
        "A".to_string(),
        vec![
            Split::new("A", third.clone()),
            Split::new("B", third.clone()),
            Split::new("C", third),
        ],
    )];

    let transfers = group_debts_from_expenses(&expenses).unwrap();
    assert_eq!(transfers.len(), 2);

    let emitted: BigDecimal = transfers.iter().map(|t| &t.amount).sum();
    let owed = BigDecimal::from_str("66.666").unwrap();
    assert!((emitted - owed).abs() < BigDecimal::from(1));
}

#[test]
fn test_transfer_list_json_shape() {
    let balances: BalanceMap = [
        ("alice".to_string(), BigDecimal::from(40)),
        ("bob".to_string(), BigDecimal::from(-40)),
    ]
    .into_iter()
    .collect();

    let transfers = simplify_debts(&balances).unwrap();
    let json = serde_json::to_value(&transfers).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{ "from": "bob", "to": "alice", "amount": "40" }])
    );
}
