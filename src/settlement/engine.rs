//! Main settlement engine that coordinates expense storage and computation

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::reports::{self, MemberSpendingSummary};
use crate::settlement::balance::{balance_total, compute_balances};
use crate::settlement::simplify::{is_settled, simplify_debts};
use crate::traits::*;
use crate::types::*;

/// Fallback label for members with no resolvable display name
pub const UNKNOWN_MEMBER_LABEL: &str = "Unknown";

/// Convenience composition of the two phases: fold the ledger into net
/// balances, then reduce them to settling transfers.
///
/// Pure function of the expense list; safe to call concurrently for
/// different groups with no coordination.
pub fn group_debts_from_expenses(expenses: &[Expense]) -> SettlementResult<Vec<Transfer>> {
    simplify_debts(&compute_balances(expenses))
}

/// Attach display names to transfers using a member directory.
///
/// Identities the directory cannot resolve (or fails to look up) are
/// labeled with [`UNKNOWN_MEMBER_LABEL`]; labeling never fails.
pub async fn label_transfers<D: MemberDirectory>(
    transfers: &[Transfer],
    directory: &D,
) -> Vec<LabeledTransfer> {
    let mut labeled = Vec::with_capacity(transfers.len());

    for transfer in transfers {
        let from = resolve_name(directory, &transfer.from).await;
        let to = resolve_name(directory, &transfer.to).await;
        labeled.push(LabeledTransfer {
            from,
            to,
            amount: transfer.amount.clone(),
        });
    }

    labeled
}

async fn resolve_name<D: MemberDirectory>(directory: &D, member_id: &str) -> String {
    directory
        .display_name(member_id)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| UNKNOWN_MEMBER_LABEL.to_string())
}

/// Settlement engine operating over a pluggable expense store
pub struct SettlementEngine<S: ExpenseStore> {
    store: S,
    validator: Box<dyn ExpenseValidator>,
}

impl<S: ExpenseStore> SettlementEngine<S> {
    /// Create a new engine with the given storage backend
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(DefaultExpenseValidator),
        }
    }

    /// Create a new engine with a custom expense validator
    pub fn with_validator(store: S, validator: Box<dyn ExpenseValidator>) -> Self {
        Self { store, validator }
    }

    // Expense operations
    /// Record a new expense after validating it
    pub async fn record_expense(&mut self, expense: Expense) -> SettlementResult<()> {
        self.validator.validate_expense(&expense)?;

        if self.store.get_expense(&expense.id).await?.is_some() {
            return Err(SettlementError::Validation(format!(
                "Expense with ID '{}' already exists",
                expense.id
            )));
        }

        self.store.save_expense(&expense).await
    }

    /// Get an expense by ID
    pub async fn get_expense(&self, expense_id: &str) -> SettlementResult<Option<Expense>> {
        self.store.get_expense(expense_id).await
    }

    /// Get an expense by ID, returning an error if not found
    pub async fn get_expense_required(&self, expense_id: &str) -> SettlementResult<Expense> {
        self.store
            .get_expense(expense_id)
            .await?
            .ok_or_else(|| SettlementError::ExpenseNotFound(expense_id.to_string()))
    }

    /// Delete an expense
    pub async fn delete_expense(&mut self, expense_id: &str) -> SettlementResult<()> {
        if self.store.get_expense(expense_id).await?.is_none() {
            return Err(SettlementError::ExpenseNotFound(expense_id.to_string()));
        }

        self.store.delete_expense(expense_id).await
    }

    /// List all expenses recorded for a group
    pub async fn group_expenses(&self, group_id: &str) -> SettlementResult<Vec<Expense>> {
        self.store.list_group_expenses(group_id).await
    }

    // Settlement operations
    /// Compute net balances for a group from its recorded expenses
    pub async fn group_balances(&self, group_id: &str) -> SettlementResult<BalanceMap> {
        let expenses = self.store.list_group_expenses(group_id).await?;
        Ok(compute_balances(&expenses))
    }

    /// Compute the settling transfers for a group
    pub async fn group_debts(&self, group_id: &str) -> SettlementResult<Vec<Transfer>> {
        let expenses = self.store.list_group_expenses(group_id).await?;
        group_debts_from_expenses(&expenses)
    }

    /// Compute the settling transfers for a group, labeled with display names
    pub async fn labeled_group_debts<D: MemberDirectory>(
        &self,
        group_id: &str,
        directory: &D,
    ) -> SettlementResult<Vec<LabeledTransfer>> {
        let transfers = self.group_debts(group_id).await?;
        Ok(label_transfers(&transfers, directory).await)
    }

    // Reporting operations
    /// Spending summary for a member across all expenses they share in
    pub async fn member_spending(
        &self,
        member_id: &str,
        as_of: NaiveDate,
    ) -> SettlementResult<MemberSpendingSummary> {
        let expenses = self.store.list_member_expenses(member_id).await?;
        Ok(reports::member_spending(&expenses, member_id, as_of))
    }

    /// Group spending totals per category, excluding settle-up payments
    pub async fn group_spending_by_category(
        &self,
        group_id: &str,
    ) -> SettlementResult<HashMap<String, BigDecimal>> {
        let expenses = self.store.list_group_expenses(group_id).await?;
        Ok(reports::category_totals(&expenses))
    }

    /// Validate the integrity of a group's ledger
    pub async fn validate_group_ledger(
        &self,
        group_id: &str,
    ) -> SettlementResult<LedgerIntegrityReport> {
        let expenses = self.store.list_group_expenses(group_id).await?;

        let mut issues = Vec::new();

        for expense in &expenses {
            if expense.amount <= BigDecimal::from(0) {
                issues.push(format!(
                    "Expense '{}' has a non-positive amount: {}",
                    expense.id, expense.amount
                ));
            }
            if !expense.is_balanced() {
                issues.push(format!(
                    "Expense '{}' splits sum to {} but the amount is {}",
                    expense.id,
                    expense.split_total(),
                    expense.amount
                ));
            }
        }

        let net_total = balance_total(&compute_balances(&expenses));
        if !is_settled(&net_total) {
            issues.push(format!(
                "Net balances sum to {} instead of zero",
                net_total
            ));
        }

        Ok(LedgerIntegrityReport {
            group_id: group_id.to_string(),
            is_valid: issues.is_empty(),
            issues,
            net_total,
        })
    }
}

/// Report on the integrity of a group's expense ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerIntegrityReport {
    pub group_id: String,
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub net_total: BigDecimal,
}
