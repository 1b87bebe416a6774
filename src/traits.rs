//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the expense ledger
///
/// This trait allows the settlement engine to work with any storage backend
/// (PostgreSQL, MongoDB, SQLite, in-memory, etc.) by implementing these methods.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Save an expense to storage
    async fn save_expense(&mut self, expense: &Expense) -> SettlementResult<()>;

    /// Get an expense by ID
    async fn get_expense(&self, expense_id: &str) -> SettlementResult<Option<Expense>>;

    /// List all expenses recorded for a group
    async fn list_group_expenses(&self, group_id: &str) -> SettlementResult<Vec<Expense>>;

    /// List all expenses in which a member appears in the splits,
    /// across every group
    async fn list_member_expenses(&self, member_id: &str) -> SettlementResult<Vec<Expense>>;

    /// Delete an expense
    async fn delete_expense(&mut self, expense_id: &str) -> SettlementResult<()>;
}

/// Resolution of member identities to display names
///
/// Used only to label transfers for presentation. The numeric core works on
/// opaque identities alone; a missing name degrades to a placeholder and
/// never fails a computation.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Look up the display name for a member, if known
    async fn display_name(&self, member_id: &str) -> SettlementResult<Option<String>>;
}

/// Trait for implementing custom expense validation rules
pub trait ExpenseValidator: Send + Sync {
    /// Validate an expense before saving
    fn validate_expense(&self, expense: &Expense) -> SettlementResult<()>;
}

/// Default expense validator with basic rules
///
/// Enforces at record time what the aggregator deliberately does not:
/// a positive amount and splits that sum to it.
pub struct DefaultExpenseValidator;

impl ExpenseValidator for DefaultExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SettlementResult<()> {
        if expense.paid_by.trim().is_empty() {
            return Err(SettlementError::Validation(
                "Payer ID cannot be empty".to_string(),
            ));
        }

        if expense.group_id.trim().is_empty() {
            return Err(SettlementError::Validation(
                "Group ID cannot be empty".to_string(),
            ));
        }

        expense.validate()
    }
}
