//! # Settlement Core
//!
//! A shared-expense engine providing balance netting, debt simplification,
//! and spending reports for groups that split costs.
//!
//! ## Features
//!
//! - **Balance aggregation**: Fold an expense ledger into one net position per member
//! - **Debt simplification**: Greedy largest-debtor/largest-creditor matching that
//!   reduces the pairwise-owing graph to a small, deterministic set of transfers
//! - **Exact arithmetic**: Fixed-point decimal amounts end-to-end, with an explicit
//!   settlement tolerance and a documented rounding discipline
//! - **Integrity checking**: Unbalanced ledgers surface as a typed error, never a
//!   silently dropped residual
//! - **Spending reports**: Per-member and per-category summaries for dashboards
//! - **Storage abstraction**: Database-agnostic design with trait-based stores
//!
//! ## Quick Start
//!
//! ```rust
//! use settlement_core::{compute_balances, simplify_debts, ExpenseBuilder};
//! use bigdecimal::BigDecimal;
//!
//! let dinner = ExpenseBuilder::new("Dinner", BigDecimal::from(100), "trip", "alice")
//!     .split("alice", BigDecimal::from(50))
//!     .split("bob", BigDecimal::from(50))
//!     .build()
//!     .unwrap();
//!
//! let balances = compute_balances(&[dinner]);
//! let transfers = simplify_debts(&balances).unwrap();
//! assert_eq!(transfers[0].from, "bob");
//! assert_eq!(transfers[0].to, "alice");
//! ```

pub mod expenses;
pub mod reports;
pub mod settlement;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use expenses::*;
pub use reports::*;
pub use settlement::*;
pub use traits::*;
pub use types::*;

// Re-export expense patterns for convenience
pub use expenses::patterns;
