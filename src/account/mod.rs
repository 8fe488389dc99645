use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite identity of an account: bank number plus account number.
///
/// Keys are value types, immutable once created, and index both the account
/// map and the transaction map of a ledger.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountKey {
    pub bank_number: u32,
    pub account_number: u32,
}

impl AccountKey {
    pub fn new(bank_number: u32, account_number: u32) -> Self {
        Self {
            bank_number,
            account_number,
        }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bank_number, self.account_number)
    }
}

impl From<(u32, u32)> for AccountKey {
    fn from((bank_number, account_number): (u32, u32)) -> Self {
        Self::new(bank_number, account_number)
    }
}

/// Account model: the owner's name and the running balance.
///
/// The balance is the total after all applied deposits and withdrawals; it
/// is only ever mutated through the owning ledger.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Account {
    pub owner_name: String,
    pub balance: f64,
}

impl Account {
    pub fn new(owner_name: impl Into<String>, balance: f64) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance,
        }
    }
}
