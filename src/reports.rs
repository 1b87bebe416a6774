//! Spending reports derived from the expense ledger
//!
//! These are presentation-oriented aggregates (dashboard figures, charts);
//! they read each member's own split share, not net positions, so a member
//! who fronted money for the whole group still reports only their share
//! as spending.

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Expense;

/// Spending summary for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSpendingSummary {
    /// Member the summary is for
    pub member_id: String,
    /// Member's total share across all expenses they appear in
    pub total_spent: BigDecimal,
    /// Member's share across expenses dated in the reference month
    pub monthly_spent: BigDecimal,
    /// Number of expenses the member shares in
    pub expense_count: usize,
}

/// Summarize a member's spending across the given expenses.
///
/// `as_of` picks the reference month for the monthly figure; expenses the
/// member does not share in contribute nothing.
pub fn member_spending(
    expenses: &[Expense],
    member_id: &str,
    as_of: NaiveDate,
) -> MemberSpendingSummary {
    let mut total_spent = BigDecimal::from(0);
    let mut monthly_spent = BigDecimal::from(0);
    let mut expense_count = 0;

    for expense in expenses {
        if let Some(share) = expense.share_of(member_id) {
            total_spent += share;
            expense_count += 1;

            if expense.date.month() == as_of.month() && expense.date.year() == as_of.year() {
                monthly_spent += share;
            }
        }
    }

    MemberSpendingSummary {
        member_id: member_id.to_string(),
        total_spent,
        monthly_spent,
        expense_count,
    }
}

/// Total spending per category, skipping settle-up payments.
///
/// Settlement expenses move money between members without anything being
/// bought, so counting them would inflate the chart.
pub fn category_totals(expenses: &[Expense]) -> HashMap<String, BigDecimal> {
    let mut totals: HashMap<String, BigDecimal> = HashMap::new();

    for expense in expenses {
        if expense.is_settlement() {
            continue;
        }
        let total = totals
            .entry(expense.category.clone())
            .or_insert_with(|| BigDecimal::from(0));
        *total += &expense.amount;
    }

    totals
}
