//! Expense construction helpers

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::*;

/// Builder for assembling expenses split by hand
///
/// Generates a UUID identifier unless one is supplied. `build` runs the
/// same validation the default record-time validator applies, so a built
/// expense is always well-formed.
#[derive(Debug)]
pub struct ExpenseBuilder {
    expense: Expense,
}

impl ExpenseBuilder {
    /// Start a new expense with a generated identifier
    pub fn new(
        description: impl Into<String>,
        amount: BigDecimal,
        group_id: impl Into<String>,
        paid_by: impl Into<MemberId>,
    ) -> Self {
        Self {
            expense: Expense::new(
                Uuid::new_v4().to_string(),
                description.into(),
                amount,
                group_id.into(),
                paid_by.into(),
                Vec::new(),
            ),
        }
    }

    /// Use a caller-supplied identifier instead of a generated one
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.expense.id = id.into();
        self
    }

    /// Set the spending category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.expense.category = category.into();
        self
    }

    /// Backdate the expense
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.expense.date = date;
        self
    }

    /// Add a member's share
    pub fn split(mut self, member_id: impl Into<MemberId>, amount: BigDecimal) -> Self {
        self.expense.splits.push(Split::new(member_id, amount));
        self
    }

    /// Build the expense, validating that the splits distribute the amount
    pub fn build(self) -> SettlementResult<Expense> {
        self.expense.validate()?;
        Ok(self.expense)
    }
}

/// Common expense patterns
pub mod patterns {
    use super::*;

    /// Record a settle-up payment between two members.
    ///
    /// The payer is the debtor clearing their debt; the single split puts
    /// the full amount on the creditor, so aggregating the resulting ledger
    /// moves both balances toward zero. Categorized so spending reports
    /// skip it. Storing the expense is the caller's choice; the settlement
    /// engine itself never persists what it computes.
    pub fn settlement_payment(
        group_id: impl Into<String>,
        from: impl Into<MemberId>,
        to: impl Into<MemberId>,
        amount: BigDecimal,
    ) -> SettlementResult<Expense> {
        ExpenseBuilder::new("Payment / Settlement", amount.clone(), group_id, from)
            .category(SETTLEMENT_CATEGORY)
            .split(to, amount)
            .build()
    }

    /// Record a shared expense carried entirely by members other than
    /// the payer
    pub fn paid_for_others(
        description: impl Into<String>,
        group_id: impl Into<String>,
        paid_by: impl Into<MemberId>,
        shares: Vec<(MemberId, BigDecimal)>,
    ) -> SettlementResult<Expense> {
        let amount: BigDecimal = shares.iter().map(|(_, share)| share).sum();
        let mut builder = ExpenseBuilder::new(description, amount, group_id, paid_by);
        for (member_id, share) in shares {
            builder = builder.split(member_id, share);
        }
        builder.build()
    }
}
