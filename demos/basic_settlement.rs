//! Basic settlement usage example

use bigdecimal::BigDecimal;
use settlement_core::utils::MemoryStore;
use settlement_core::{patterns, ExpenseBuilder, Member, SettlementEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("💸 Settlement Core - Basic Settlement Example\n");

    let mut store = MemoryStore::new();
    store.add_member(Member::new("alice", "Alice"));
    store.add_member(Member::new("bob", "Bob"));
    store.add_member(Member::new("carol", "Carol"));

    let mut engine = SettlementEngine::new(store.clone());

    // 1. Record a weekend's worth of shared expenses
    println!("🧾 Recording Shared Expenses...\n");

    let hotel = ExpenseBuilder::new("Hotel", BigDecimal::from(300), "weekend", "alice")
        .split("alice", BigDecimal::from(100))
        .split("bob", BigDecimal::from(100))
        .split("carol", BigDecimal::from(100))
        .build()?;
    engine.record_expense(hotel).await?;
    println!("  ✓ Alice paid 300 for the hotel, split three ways");

    let dinner = ExpenseBuilder::new("Dinner", BigDecimal::from(90), "weekend", "bob")
        .split("alice", BigDecimal::from(30))
        .split("bob", BigDecimal::from(30))
        .split("carol", BigDecimal::from(30))
        .build()?;
    engine.record_expense(dinner).await?;
    println!("  ✓ Bob paid 90 for dinner, split three ways");

    let taxi = ExpenseBuilder::new("Taxi", BigDecimal::from(60), "weekend", "carol")
        .split("bob", BigDecimal::from(30))
        .split("carol", BigDecimal::from(30))
        .build()?;
    engine.record_expense(taxi).await?;
    println!("  ✓ Carol paid 60 for the taxi, split with Bob\n");

    // 2. Net positions
    println!("📊 Net Balances:");
    let balances = engine.group_balances("weekend").await?;
    let mut members: Vec<_> = balances.keys().collect();
    members.sort();
    for member in members {
        println!("  {member}: {}", balances[member]);
    }
    println!();

    // 3. The minimal settle-up plan
    println!("🤝 Who Pays Whom:");
    let plan = engine.labeled_group_debts("weekend", &store).await?;
    for transfer in &plan {
        println!("  {} pays {} → {}", transfer.from, transfer.amount, transfer.to);
    }
    println!();

    // 4. Record the payments and confirm the group is square
    for transfer in engine.group_debts("weekend").await? {
        let payment = patterns::settlement_payment(
            "weekend",
            transfer.from,
            transfer.to,
            transfer.amount,
        )?;
        engine.record_expense(payment).await?;
    }

    let remaining = engine.group_debts("weekend").await?;
    println!(
        "✅ After settling: {} outstanding transfers",
        remaining.len()
    );

    Ok(())
}
