//! Debt simplification: reducing net balances to a minimal set of transfers

use bigdecimal::{BigDecimal, RoundingMode};

use crate::settlement::balance::balance_total;
use crate::types::{BalanceMap, MemberId, SettlementError, SettlementResult, Transfer};

/// Balances within this many minor units of zero are treated as settled.
///
/// Absorbs rounding noise introduced by upstream split division. An explicit
/// named parameter, not a magic literal; the exact-decimal arithmetic used
/// throughout keeps it from ever having to absorb binary floating-point drift.
pub fn settlement_tolerance() -> BigDecimal {
    BigDecimal::from(1) / BigDecimal::from(10)
}

/// Whether a net balance is close enough to zero to be considered settled
pub fn is_settled(balance: &BigDecimal) -> bool {
    balance.abs() <= settlement_tolerance()
}

/// Reduce a net-balance mapping to an ordered list of settling transfers.
///
/// Greedy largest-magnitude matching: debtors sorted most-negative first,
/// creditors most-positive first, then a two-index walk settles the smaller
/// of the current debt and credit at each step. Ties in either sort are
/// broken by member id, so the output is a pure function of the mapping.
///
/// Each emitted amount is rounded to whole minor units independently while
/// running balances are adjusted by the unrounded settled amount, so rounding
/// error does not compound across iterations. A settled amount under half a
/// minor unit rounds to zero and is dropped rather than emitted.
///
/// Greedy matching keeps the transfer count small but is not guaranteed
/// minimal for every balance distribution; provably minimal settlement is a
/// subset-sum-hard problem.
///
/// # Errors
///
/// Returns [`SettlementError::UnbalancedLedger`] when the balances sum to
/// something beyond tolerance, which can only happen if an upstream expense
/// had splits not matching its amount. Residual balance is never silently
/// dropped.
pub fn simplify_debts(balances: &BalanceMap) -> SettlementResult<Vec<Transfer>> {
    let tolerance = settlement_tolerance();

    let imbalance = balance_total(balances);
    if imbalance.abs() > tolerance {
        return Err(SettlementError::UnbalancedLedger { imbalance });
    }

    let mut debtors: Vec<(MemberId, BigDecimal)> = Vec::new();
    let mut creditors: Vec<(MemberId, BigDecimal)> = Vec::new();

    for (member, balance) in balances {
        if *balance < -&tolerance {
            debtors.push((member.clone(), balance.clone()));
        } else if *balance > tolerance {
            creditors.push((member.clone(), balance.clone()));
        }
    }

    debtors.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let debt = debtors[i].1.abs();
        let credit = creditors[j].1.clone();
        let settled = debt.min(credit);

        if settled > BigDecimal::from(0) {
            let rounded = settled.with_scale_round(0, RoundingMode::HalfUp);
            if rounded > BigDecimal::from(0) {
                transfers.push(Transfer::new(
                    debtors[i].0.clone(),
                    creditors[j].0.clone(),
                    rounded,
                ));
            }
        }

        debtors[i].1 += &settled;
        creditors[j].1 -= &settled;

        if debtors[i].1.abs() < tolerance {
            i += 1;
        }
        if creditors[j].1 < tolerance {
            j += 1;
        }
    }

    Ok(transfers)
}
