//! Ownership and circuit breaker.
//!
//! The owner recorded at `init` is the only identity allowed to pause,
//! resume or retire the ledger. Retirement is terminal: once set, the
//! breaker never changes again and every guarded operation fails.

use crate::{storage, DataKey, Error};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessState {
    pub owner: Address,
    pub paused: bool,
    pub retired: bool,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Access)
}

pub fn init(env: &Env, owner: &Address) -> AccessState {
    let state = AccessState {
        owner: owner.clone(),
        paused: false,
        retired: false,
    };
    store(env, &state);
    state
}

pub fn load(env: &Env) -> Result<AccessState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Access)
        .ok_or(Error::NotInitialized)
}

/// Read the breaker without failing on an uninitialized ledger.
pub fn peek(env: &Env) -> Option<AccessState> {
    env.storage().instance().get(&DataKey::Access)
}

fn store(env: &Env, state: &AccessState) {
    env.storage().instance().set(&DataKey::Access, state);
    storage::bump_instance(env);
}

/// Gate for every mutating bounty or submission operation.
///
/// Retirement wins over pause when both flags are set.
pub fn guard(env: &Env) -> Result<(), Error> {
    let state = load(env)?;
    if state.retired {
        return Err(Error::Retired);
    }
    if state.paused {
        return Err(Error::Paused);
    }
    Ok(())
}

fn authorize_owner(state: &AccessState, caller: &Address) -> Result<(), Error> {
    if *caller != state.owner {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<AccessState, Error> {
    let mut state = load(env)?;
    authorize_owner(&state, caller)?;
    if state.retired {
        return Err(Error::Retired);
    }
    if state.paused {
        return Err(Error::AlreadyPaused);
    }
    state.paused = true;
    store(env, &state);
    Ok(state)
}

pub fn resume(env: &Env, caller: &Address) -> Result<AccessState, Error> {
    let mut state = load(env)?;
    authorize_owner(&state, caller)?;
    if state.retired {
        return Err(Error::Retired);
    }
    if !state.paused {
        return Err(Error::NotPaused);
    }
    state.paused = false;
    store(env, &state);
    Ok(state)
}

pub fn retire(env: &Env, caller: &Address) -> Result<AccessState, Error> {
    let mut state = load(env)?;
    authorize_owner(&state, caller)?;
    state.retired = true;
    store(env, &state);
    Ok(state)
}
