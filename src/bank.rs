use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::atomic::{AtomicU32, Ordering},
};

use bigdecimal::BigDecimal;
use tracing::{debug, trace, warn};

use crate::account::{Account, AccountError, SharedAccount};

pub type BankId = u32;

static NEXT_BANK_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Debug)]
struct BankProfile {
    id: BankId,
    name: RefCell<Option<String>>,
}

/// Non-owning link from an [`Account`] back to the bank it was registered
/// with. Resolves to nothing once the bank is dropped.
#[derive(Debug, Clone)]
pub struct BankRef(Weak<BankProfile>);

impl BankRef {
    pub fn id(&self) -> Option<BankId> {
        self.0.upgrade().map(|profile| profile.id)
    }

    /// Current name of the bank, including renames made after registration.
    pub fn name(&self) -> Option<String> {
        self.0
            .upgrade()
            .and_then(|profile| profile.name.borrow().clone())
    }

    pub fn is_bank(&self, bank: &Bank) -> bool {
        Weak::ptr_eq(&self.0, &Rc::downgrade(&bank.profile))
    }
}

/// Named collection of accounts that orchestrates transfers between them.
///
/// The bank keeps handles to the accounts it tracks, it does not own them:
/// callers keep their own [`SharedAccount`] and may mutate it directly.
#[derive(Debug)]
pub struct Bank {
    profile: Rc<BankProfile>,
    accounts: Vec<SharedAccount>,
}

impl Default for Bank {
    fn default() -> Self {
        Self {
            profile: Rc::new(BankProfile {
                id: NEXT_BANK_ID.fetch_add(1, Ordering::Relaxed),
                name: RefCell::new(None),
            }),
            accounts: Vec::new(),
        }
    }
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let bank = Self::default();
        bank.set_name(name);
        bank
    }

    pub fn id(&self) -> BankId {
        self.profile.id
    }

    pub fn name(&self) -> Option<String> {
        self.profile.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.profile.name.borrow_mut() = Some(name.into());
    }

    /// Appends `account` and points its back-reference at this bank.
    /// Registering the same account twice keeps both entries.
    pub fn add_account(&mut self, account: &SharedAccount) {
        account
            .borrow_mut()
            .attach_to(BankRef(Rc::downgrade(&self.profile)));
        self.accounts.push(Rc::clone(account));
        trace!(
            bank = self.id(),
            accounts = self.accounts.len(),
            "account registered"
        );
    }

    pub fn accounts(&self) -> &[SharedAccount] {
        &self.accounts
    }

    pub fn find_by_owner(&self, owner: &str) -> Option<SharedAccount> {
        self.accounts
            .iter()
            .find(|acc| acc.borrow().owner() == owner)
            .cloned()
    }

    /// Exact sum of every registered entry's balance.
    pub fn total_balance(&self) -> BigDecimal {
        self.accounts
            .iter()
            .map(|acc| acc.borrow().balance().clone())
            .sum()
    }

    /// Moves `amount` from `source` to `destination`. The destination is only
    /// credited once the source debit succeeded, so a failed transfer leaves
    /// both balances as they were. Neither account has to be registered here.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: &BigDecimal,
    ) -> Result<(), AccountError> {
        if let Err(err) = source.debit(amount) {
            warn!(
                bank = self.id(),
                from = source.owner(),
                to = destination.owner(),
                %amount,
                "transfer rejected: {err}"
            );
            return Err(err);
        }
        destination.credit(amount);
        debug!(
            bank = self.id(),
            from = source.owner(),
            to = destination.owner(),
            %amount,
            "transferred"
        );
        Ok(())
    }

    /// [`Bank::transfer`] over shared handles. Both handles may point to the
    /// same account, in which case it is debited and credited in place.
    pub fn transfer_shared(
        &self,
        source: &SharedAccount,
        destination: &SharedAccount,
        amount: &BigDecimal,
    ) -> Result<(), AccountError> {
        if Rc::ptr_eq(source, destination) {
            let mut acc = source.borrow_mut();
            acc.debit(amount)?;
            acc.credit(amount);
            return Ok(());
        }
        self.transfer(
            &mut source.borrow_mut(),
            &mut destination.borrow_mut(),
            amount,
        )
    }
}
