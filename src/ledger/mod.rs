use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::account::{Account, AccountKey};

mod export;

/// Ledger operation errors
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Registration with a key that is already in use
    #[error("account {0} is already registered")]
    DuplicateAccount(AccountKey),

    /// Operation referencing an unregistered key
    #[error("account {0} not found")]
    AccountNotFound(AccountKey),

    /// Negative amount, or a withdrawal exceeding the balance
    #[error("invalid amount ${amount:.2} (balance ${balance:.2})")]
    InvalidAmount { amount: f64, balance: f64 },

    /// File-system failure while exporting a ledger
    #[error("ledger export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory bank-account ledger.
///
/// Holds every registered account together with its chronological history of
/// transaction descriptions. Both maps are keyed by [`AccountKey`] and stay
/// in lockstep: registration inserts into both, and no operation ever
/// removes a key. Each instance is caller-owned; there is no process-wide
/// shared state.
#[derive(Debug, Default)]
pub struct AccountLedger {
    accounts: HashMap<AccountKey, Account>,
    transactions: HashMap<AccountKey, Vec<String>>,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account with the given owner and opening balance.
    ///
    /// Fails with [`LedgerError::DuplicateAccount`] if the key is already
    /// registered, leaving the existing account and its history untouched.
    pub fn register_account(
        &mut self,
        bank_number: u32,
        account_number: u32,
        owner_name: &str,
        initial_balance: f64,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(bank_number, account_number);
        debug!("Registering account {} for {}", key, owner_name);

        if self.accounts.contains_key(&key) {
            warn!("Rejected duplicate registration for account {}", key);
            return Err(LedgerError::DuplicateAccount(key));
        }

        self.accounts.insert(key, Account::new(owner_name, initial_balance));
        self.transactions.insert(key, Vec::new());

        info!(
            "Account {} registered with opening balance ${:.2}",
            key, initial_balance
        );
        Ok(())
    }

    /// Withdraw `amount` from an account and record the transaction.
    ///
    /// The amount must be non-negative and must not exceed the current
    /// balance; a rejected withdrawal leaves balance and history unchanged.
    pub fn withdraw_cash(
        &mut self,
        bank_number: u32,
        account_number: u32,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(bank_number, account_number);
        debug!("Withdrawing ${:.2} from account {}", amount, key);

        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        if amount < 0.0 || amount > account.balance {
            warn!(
                "Rejected withdrawal of ${:.2} from account {} (balance ${:.2})",
                amount, key, account.balance
            );
            return Err(LedgerError::InvalidAmount {
                amount,
                balance: account.balance,
            });
        }

        account.balance -= amount;
        let entry = format!(
            "Withdrawal - Amount: ${:.2}, Updated Balance: ${:.2}",
            amount, account.balance
        );
        // The transaction list exists for every registered key.
        self.transactions.entry(key).or_default().push(entry);

        info!(
            "Withdrew ${:.2} from account {}, balance now ${:.2}",
            amount, key, self.accounts[&key].balance
        );
        Ok(())
    }

    /// Deposit `amount` into an account and record the transaction.
    ///
    /// The amount must be non-negative; a rejected deposit leaves balance
    /// and history unchanged.
    pub fn deposit_cash(
        &mut self,
        bank_number: u32,
        account_number: u32,
        amount: f64,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(bank_number, account_number);
        debug!("Depositing ${:.2} into account {}", amount, key);

        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        if amount < 0.0 {
            warn!(
                "Rejected deposit of ${:.2} into account {}",
                amount, key
            );
            return Err(LedgerError::InvalidAmount {
                amount,
                balance: account.balance,
            });
        }

        account.balance += amount;
        let entry = format!(
            "Deposit - Amount: ${:.2}, Updated Balance: ${:.2}",
            amount, account.balance
        );
        self.transactions.entry(key).or_default().push(entry);

        info!(
            "Deposited ${:.2} into account {}, balance now ${:.2}",
            amount, key, self.accounts[&key].balance
        );
        Ok(())
    }

    /// Export an account's transaction history to a text file.
    ///
    /// Writes one transaction per line in chronological order, creating or
    /// overwriting the file at `path`. Every line, including the last, ends
    /// with a newline.
    pub fn print_ledger(
        &self,
        path: impl AsRef<Path>,
        bank_number: u32,
        account_number: u32,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(bank_number, account_number);
        let history = self
            .transactions
            .get(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        export::write_history(path.as_ref(), history)?;
        info!(
            "Exported {} transactions for account {} to {}",
            history.len(),
            key,
            path.as_ref().display()
        );
        Ok(())
    }

    /// All registered accounts, keyed by account identity.
    pub fn accounts(&self) -> &HashMap<AccountKey, Account> {
        &self.accounts
    }

    /// All transaction histories, keyed by account identity.
    pub fn transactions(&self) -> &HashMap<AccountKey, Vec<String>> {
        &self.transactions
    }

    /// Mutable view of the transaction histories, for callers that seed or
    /// amend histories directly. No validation is performed on entries
    /// pushed through this accessor.
    pub fn transactions_mut(&mut self) -> &mut HashMap<AccountKey, Vec<String>> {
        &mut self.transactions
    }
}
