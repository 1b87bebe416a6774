//! Balance aggregation: folding an expense ledger into net positions

use bigdecimal::BigDecimal;

use crate::types::{BalanceMap, Expense};

/// Fold a list of expenses into one net balance per member.
///
/// The payer is credited the full expense amount; every split member is
/// debited their share. A payer appearing in their own splits nets out
/// naturally and is not special-cased. Over a well-formed ledger (every
/// expense's splits summing to its amount) the balances sum to exactly zero.
///
/// Pure and infallible. Malformed records are accumulated as given; the
/// output is only meaningful for well-formed input, and the simplifier
/// detects the resulting imbalance.
pub fn compute_balances(expenses: &[Expense]) -> BalanceMap {
    let mut balances = BalanceMap::new();

    for expense in expenses {
        let payer = balances
            .entry(expense.paid_by.clone())
            .or_insert_with(|| BigDecimal::from(0));
        *payer += &expense.amount;

        for split in &expense.splits {
            let debtor = balances
                .entry(split.member_id.clone())
                .or_insert_with(|| BigDecimal::from(0));
            *debtor -= &split.amount;
        }
    }

    balances
}

/// Sum of all net balances; zero (within tolerance) for a closed ledger
pub fn balance_total(balances: &BalanceMap) -> BigDecimal {
    balances.values().sum()
}
