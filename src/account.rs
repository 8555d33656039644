use std::{
    cell::RefCell,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

use bigdecimal::{BigDecimal, Zero};
use thiserror::Error;
use tracing::{debug, warn};

use crate::bank::BankRef;

/// Account handle shared between the caller and any [`Bank`](crate::bank::Bank)
/// it is registered with.
pub type SharedAccount = Rc<RefCell<Account>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds")]
    InsufficientFunds,
}

/// Ledger entry holding an arbitrary-precision decimal balance.
///
/// Equality and hashing only look at `owner` and `balance`, so two accounts
/// built independently with the same values compare equal even though they
/// are distinct entries.
#[derive(Debug, Clone, Default)]
pub struct Account {
    owner: String,
    balance: BigDecimal,
    bank: Option<BankRef>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: BigDecimal) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn shared(self) -> SharedAccount {
        Rc::new(RefCell::new(self))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Overwrites the balance without any check. Use [`Account::debit`] and
    /// [`Account::credit`] for business operations.
    pub fn set_balance(&mut self, balance: BigDecimal) {
        self.balance = balance;
    }

    /// Bank this account was last registered with, if any.
    pub fn bank(&self) -> Option<&BankRef> {
        self.bank.as_ref()
    }

    pub(crate) fn attach_to(&mut self, bank: BankRef) {
        self.bank = Some(bank);
    }

    /// Subtracts `amount`, or fails leaving the balance untouched when the
    /// result would be negative. The sign of `amount` is not checked.
    pub fn debit(&mut self, amount: &BigDecimal) -> Result<(), AccountError> {
        let new_balance = &self.balance - amount;
        if new_balance < BigDecimal::zero() {
            warn!(
                owner = %self.owner,
                balance = %self.balance,
                %amount,
                "debit rejected"
            );
            return Err(AccountError::InsufficientFunds);
        }
        self.balance = new_balance;
        debug!(
            owner = %self.owner,
            %amount,
            balance = %self.balance,
            "debited"
        );
        Ok(())
    }

    /// Adds `amount` unconditionally. A negative amount lowers the balance
    /// without the sufficiency check done by [`Account::debit`].
    pub fn credit(&mut self, amount: &BigDecimal) {
        self.balance += amount;
        debug!(
            owner = %self.owner,
            %amount,
            balance = %self.balance,
            "credited"
        );
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.balance.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.owner, self.balance.to_plain_string())
    }
}
