//! Spending report example

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use settlement_core::utils::MemoryStore;
use settlement_core::{ExpenseBuilder, SettlementEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📈 Settlement Core - Spending Report Example\n");

    let store = MemoryStore::new();
    let mut engine = SettlementEngine::new(store);

    let march = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let february = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();

    let groceries = ExpenseBuilder::new("Groceries", BigDecimal::from(80), "flat", "alice")
        .category("Food")
        .date(march)
        .split("alice", BigDecimal::from(40))
        .split("bob", BigDecimal::from(40))
        .build()?;
    engine.record_expense(groceries).await?;

    let internet = ExpenseBuilder::new("Internet", BigDecimal::from(50), "flat", "bob")
        .category("Utilities")
        .date(march)
        .split("alice", BigDecimal::from(25))
        .split("bob", BigDecimal::from(25))
        .build()?;
    engine.record_expense(internet).await?;

    let concert = ExpenseBuilder::new("Concert", BigDecimal::from(120), "flat", "alice")
        .category("Leisure")
        .date(february)
        .split("alice", BigDecimal::from(60))
        .split("bob", BigDecimal::from(60))
        .build()?;
    engine.record_expense(concert).await?;

    // Per-member dashboard figures
    let as_of = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    for member in ["alice", "bob"] {
        let summary = engine.member_spending(member, as_of).await?;
        println!(
            "{member}: total {} | this month {} | {} shared expenses",
            summary.total_spent, summary.monthly_spent, summary.expense_count
        );
    }
    println!();

    // Category chart data
    println!("By category:");
    let totals = engine.group_spending_by_category("flat").await?;
    let mut categories: Vec<_> = totals.keys().collect();
    categories.sort();
    for category in categories {
        println!("  {category}: {}", totals[category]);
    }

    Ok(())
}
