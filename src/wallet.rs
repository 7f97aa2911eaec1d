use std::fmt;
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bitcoin(pub u64);

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BTC", self.0)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletError {
    #[error("cannot withdraw, insufficient funds")]
    InsufficientFunds,

    #[error("cannot deposit, balance would overflow")]
    Overflow,
}

#[derive(Debug, Default)]
pub struct Wallet {
    balance: Bitcoin,
}

impl Wallet {
    pub fn new(balance: Bitcoin) -> Self {
        Self { balance }
    }

    /// Leaves the balance untouched when the sum would not fit in a `u64`.
    pub fn deposit(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        self.balance.0 = self
            .balance
            .0
            .checked_add(amount.0)
            .ok_or(WalletError::Overflow)?;
        Ok(())
    }

    pub fn balance(&self) -> Bitcoin {
        self.balance
    }

    /// Leaves the balance untouched when `amount` exceeds it.
    pub fn withdraw(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        self.balance.0 = self
            .balance
            .0
            .checked_sub(amount.0)
            .ok_or(WalletError::InsufficientFunds)?;
        Ok(())
    }
}
