//! Bounty records and their Open -> Closed lifecycle.
//!
//! The registry enforces single-entity rules only. Moving funds and checking
//! who may close a bounty belong to the contract entrypoints.

use crate::identifier::{self, Identifier};
use crate::{storage, DataKey, Error};
use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BountyStatus {
    Open,
    Closed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bounty {
    pub id: BytesN<32>,
    pub creator: Address,
    /// Escrowed reward, fixed at creation.
    pub amount: i128,
    pub status: BountyStatus,
}

pub fn exists(env: &Env, id: &Identifier) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Bounty(id.clone()))
}

/// Checks `create` would accept `id` and `amount` without writing anything.
pub fn validate_new(env: &Env, id: &Identifier, amount: i128) -> Result<(), Error> {
    identifier::ensure_valid(id)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if exists(env, id) {
        return Err(Error::BountyExists);
    }
    Ok(())
}

pub fn create(
    env: &Env,
    id: &Identifier,
    amount: i128,
    creator: &Address,
) -> Result<Bounty, Error> {
    validate_new(env, id, amount)?;

    let bounty = Bounty {
        id: id.clone(),
        creator: creator.clone(),
        amount,
        status: BountyStatus::Open,
    };
    save(env, &bounty);

    let mut index = list(env);
    index.push_back(id.clone());
    env.storage().persistent().set(&DataKey::BountyIndex, &index);
    storage::bump_persistent(env, &DataKey::BountyIndex);

    Ok(bounty)
}

pub fn get(env: &Env, id: &Identifier) -> Result<Bounty, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Bounty(id.clone()))
        .ok_or(Error::BountyNotFound)
}

/// Not idempotent: closing a closed bounty is an error.
pub fn close(env: &Env, id: &Identifier) -> Result<Bounty, Error> {
    let mut bounty = get(env, id)?;
    if bounty.status == BountyStatus::Closed {
        return Err(Error::BountyClosed);
    }
    bounty.status = BountyStatus::Closed;
    save(env, &bounty);
    Ok(bounty)
}

/// All bounty ids in creation order.
pub fn list(env: &Env) -> Vec<Identifier> {
    env.storage()
        .persistent()
        .get(&DataKey::BountyIndex)
        .unwrap_or(Vec::new(env))
}

fn save(env: &Env, bounty: &Bounty) {
    let key = DataKey::Bounty(bounty.id.clone());
    env.storage().persistent().set(&key, bounty);
    storage::bump_persistent(env, &key);
}
