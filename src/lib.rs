//! An in-memory bank-account ledger.
//!
//! The crate is built around a single caller-owned [`AccountLedger`] that
//! maps a composite [`AccountKey`] (bank number plus account number) to an
//! [`Account`] and to that account's chronological transaction history.
//! Deposits and withdrawals validate their preconditions before touching any
//! state, so a rejected operation never leaves a partial mutation behind.
//! [`AccountLedger::print_ledger`] exports one account's history to a plain
//! text file, one transaction per line.
//!
//! No global instance exists and no internal locking is performed; callers
//! that share a ledger across threads must wrap it in their own mutex.

pub mod account;
pub mod ledger;

pub use account::{Account, AccountKey};
pub use ledger::{AccountLedger, LedgerError};
