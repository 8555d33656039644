/// Ledger entry with an exact decimal balance and its debit/credit operations.
pub mod account;

/// Collection of accounts plus transfer orchestration.
///
/// NOTE: everything here is built on `Rc`, so a bank and its accounts stay on
/// one thread. Wrap plain [`account::Account`] values yourself if they need to
/// cross threads.
pub mod bank;

/// Exact parsing of textual amounts.
pub mod amount;

/// CSV runner used by the binary and by integration tests.
pub mod bin_utils;
