//! Adapter over the companion token contract.
//!
//! The ledger only needs three things from the token: balances, pulling a
//! pre-approved allowance into escrow, and paying out of escrow. The escrow
//! account is the ledger contract's own address.

use crate::{DataKey, Error};
use soroban_sdk::{token, Address, Env};

pub trait TokenLedger {
    fn balance_of(&self, id: &Address) -> i128;

    /// Move `amount` from `from` into escrow using the allowance `from`
    /// granted the ledger.
    fn pull_into_escrow(&self, from: &Address, amount: i128) -> Result<(), Error>;

    /// Move `amount` out of escrow to `to`.
    fn pay_from_escrow(&self, to: &Address, amount: i128) -> Result<(), Error>;

    fn escrow_balance(&self) -> i128;
}

pub struct EscrowTokenLedger<'a> {
    client: token::TokenClient<'a>,
    escrow: Address,
}

impl<'a> EscrowTokenLedger<'a> {
    pub fn open(env: &'a Env) -> Result<Self, Error> {
        let token_address = configured_token(env).ok_or(Error::NotInitialized)?;
        Ok(Self {
            client: token::TokenClient::new(env, &token_address),
            escrow: env.current_contract_address(),
        })
    }
}

impl TokenLedger for EscrowTokenLedger<'_> {
    fn balance_of(&self, id: &Address) -> i128 {
        self.client.balance(id)
    }

    fn pull_into_escrow(&self, from: &Address, amount: i128) -> Result<(), Error> {
        if self.balance_of(from) < amount {
            return Err(Error::TokenTransferFailed);
        }
        if self.client.allowance(from, &self.escrow) < amount {
            return Err(Error::TokenTransferFailed);
        }
        match self
            .client
            .try_transfer_from(&self.escrow, from, &self.escrow, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TokenTransferFailed),
        }
    }

    fn pay_from_escrow(&self, to: &Address, amount: i128) -> Result<(), Error> {
        if self.escrow_balance() < amount {
            return Err(Error::EscrowShortfall);
        }
        match self.client.try_transfer(&self.escrow, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::EscrowShortfall),
        }
    }

    fn escrow_balance(&self) -> i128 {
        self.balance_of(&self.escrow)
    }
}

pub fn configured_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

/// Token ids must be contract addresses (`C...` strkeys).
pub fn validate_token(token: &Address) -> Result<(), Error> {
    let strkey = token.to_string();
    if strkey.len() != 56 {
        return Err(Error::InvalidToken);
    }

    let mut bytes = [0u8; 56];
    strkey.copy_into_slice(&mut bytes);
    if bytes[0] == b'C' {
        Ok(())
    } else {
        Err(Error::InvalidToken)
    }
}
