//! Core types and data structures for the settlement engine

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity of a group member. Opaque to the engine; any stable string works
/// (database ids, UUIDs, usernames).
pub type MemberId = String;

/// Net balance per member: credit positive (owed money), debit negative
/// (owing money). Built fresh on every aggregation, never persisted.
pub type BalanceMap = HashMap<MemberId, BigDecimal>;

/// Expense category used to record settle-up payments between members.
/// Expenses in this category are excluded from spending reports.
pub const SETTLEMENT_CATEGORY: &str = "Settlement";

/// Default category for expenses created without one
pub const DEFAULT_CATEGORY: &str = "General";

/// A group member with presentation details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for the member
    pub id: MemberId,
    /// Display name used to label transfers
    pub name: String,
    /// Optional contact email
    pub email: Option<String>,
}

impl Member {
    /// Create a new member
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
        }
    }
}

/// A single member's share of an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Member who owes this share
    pub member_id: MemberId,
    /// Owed amount in minor currency units, non-negative
    pub amount: BigDecimal,
}

impl Split {
    /// Create a new split
    pub fn new(member_id: impl Into<MemberId>, amount: BigDecimal) -> Self {
        Self {
            member_id: member_id.into(),
            amount,
        }
    }
}

/// A single payment event: one payer, per-member owed shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier for the expense
    pub id: String,
    /// What the expense was for
    pub description: String,
    /// Total amount paid, in minor currency units
    pub amount: BigDecimal,
    /// Group this expense belongs to
    pub group_id: String,
    /// Member who paid the full amount
    pub paid_by: MemberId,
    /// Per-member shares; for a well-formed expense they sum to `amount`.
    /// The payer may appear here too (self-splits net out in aggregation).
    pub splits: Vec<Split>,
    /// Spending category
    pub category: String,
    /// Date the expense occurred (backdatable)
    pub date: NaiveDate,
    /// When the record was created
    pub created_at: NaiveDateTime,
    /// When the record was last updated
    pub updated_at: NaiveDateTime,
}

impl Expense {
    /// Create a new expense dated today
    pub fn new(
        id: String,
        description: String,
        amount: BigDecimal,
        group_id: String,
        paid_by: MemberId,
        splits: Vec<Split>,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id,
            description,
            amount,
            group_id,
            paid_by,
            splits,
            category: DEFAULT_CATEGORY.to_string(),
            date: now.date(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sum of all split amounts
    pub fn split_total(&self) -> BigDecimal {
        self.splits.iter().map(|s| &s.amount).sum()
    }

    /// Check that the splits fully distribute the amount paid
    pub fn is_balanced(&self) -> bool {
        self.split_total() == self.amount
    }

    /// The share owed by a specific member, if they appear in the splits
    pub fn share_of(&self, member_id: &str) -> Option<&BigDecimal> {
        self.splits
            .iter()
            .find(|s| s.member_id == member_id)
            .map(|s| &s.amount)
    }

    /// Whether this expense records a settle-up payment rather than spending
    pub fn is_settlement(&self) -> bool {
        self.category == SETTLEMENT_CATEGORY
    }

    /// Validate the expense
    pub fn validate(&self) -> SettlementResult<()> {
        if self.amount <= BigDecimal::from(0) {
            return Err(SettlementError::Validation(
                "Expense amount must be positive".to_string(),
            ));
        }

        if self.splits.is_empty() {
            return Err(SettlementError::Validation(
                "Expense must have at least one split".to_string(),
            ));
        }

        for split in &self.splits {
            if split.amount < BigDecimal::from(0) {
                return Err(SettlementError::Validation(
                    "Split amounts must be non-negative".to_string(),
                ));
            }
        }

        if !self.is_balanced() {
            return Err(SettlementError::Validation(format!(
                "Splits do not sum to the expense amount: amount = {}, splits = {}",
                self.amount,
                self.split_total()
            )));
        }

        Ok(())
    }
}

/// A single settling payment from one member to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Member paying (debtor)
    pub from: MemberId,
    /// Member receiving (creditor)
    pub to: MemberId,
    /// Amount to pay, rounded to whole minor units, strictly positive
    pub amount: BigDecimal,
}

impl Transfer {
    /// Create a new transfer
    pub fn new(from: impl Into<MemberId>, to: impl Into<MemberId>, amount: BigDecimal) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// A transfer labeled with display names for the consuming surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledTransfer {
    /// Display name of the paying member
    pub from: String,
    /// Display name of the receiving member
    pub to: String,
    /// Amount to pay, in whole minor units
    pub amount: BigDecimal,
}

/// Errors that can occur in the settlement engine
#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(String),
    #[error("Ledger is unbalanced: net balances sum to {imbalance}, expected zero")]
    UnbalancedLedger { imbalance: BigDecimal },
}

/// Result type for settlement operations
pub type SettlementResult<T> = Result<T, SettlementError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Expense {
        Expense::new(
            "exp1".to_string(),
            "Dinner".to_string(),
            BigDecimal::from(100),
            "trip".to_string(),
            "alice".to_string(),
            vec![
                Split::new("alice", BigDecimal::from(50)),
                Split::new("bob", BigDecimal::from(50)),
            ],
        )
    }

    #[test]
    fn test_split_total_and_balance() {
        let expense = sample_expense();
        assert_eq!(expense.split_total(), BigDecimal::from(100));
        assert!(expense.is_balanced());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_share_of() {
        let expense = sample_expense();
        assert_eq!(expense.share_of("bob"), Some(&BigDecimal::from(50)));
        assert_eq!(expense.share_of("carol"), None);
    }

    #[test]
    fn test_validate_rejects_unbalanced_splits() {
        let mut expense = sample_expense();
        expense.splits[1].amount = BigDecimal::from(40);
        assert!(matches!(
            expense.validate(),
            Err(SettlementError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let mut expense = sample_expense();
        expense.amount = BigDecimal::from(0);
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_split() {
        let mut expense = sample_expense();
        expense.splits[0].amount = BigDecimal::from(-10);
        expense.splits[1].amount = BigDecimal::from(110);
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_settlement_category_detection() {
        let mut expense = sample_expense();
        assert!(!expense.is_settlement());
        expense.category = SETTLEMENT_CATEGORY.to_string();
        assert!(expense.is_settlement());
    }
}
