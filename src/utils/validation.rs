//! Validation utilities

use bigdecimal::BigDecimal;
use std::collections::HashSet;

use crate::traits::*;
use crate::types::*;

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: &BigDecimal) -> SettlementResult<()> {
    if *amount <= BigDecimal::from(0) {
        Err(SettlementError::Validation(
            "Amount must be positive".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a member ID is usable as an identity
pub fn validate_member_id(member_id: &str) -> SettlementResult<()> {
    if member_id.trim().is_empty() {
        return Err(SettlementError::Validation(
            "Member ID cannot be empty".to_string(),
        ));
    }

    if member_id.len() > 64 {
        return Err(SettlementError::Validation(
            "Member ID cannot exceed 64 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an expense description is valid
pub fn validate_description(description: &str) -> SettlementResult<()> {
    if description.trim().is_empty() {
        return Err(SettlementError::Validation(
            "Expense description cannot be empty".to_string(),
        ));
    }

    if description.len() > 500 {
        return Err(SettlementError::Validation(
            "Expense description cannot exceed 500 characters".to_string(),
        ));
    }

    Ok(())
}

/// Enhanced expense validator with detailed checks
pub struct EnhancedExpenseValidator;

impl ExpenseValidator for EnhancedExpenseValidator {
    fn validate_expense(&self, expense: &Expense) -> SettlementResult<()> {
        // Basic validation first
        DefaultExpenseValidator.validate_expense(expense)?;

        validate_description(&expense.description)?;
        validate_member_id(&expense.paid_by)?;

        // Each split member may appear only once
        let mut seen = HashSet::new();
        for split in &expense.splits {
            validate_member_id(&split.member_id)?;
            if !seen.insert(&split.member_id) {
                return Err(SettlementError::Validation(format!(
                    "Member '{}' appears multiple times in the splits",
                    split.member_id
                )));
            }
        }

        Ok(())
    }
}
