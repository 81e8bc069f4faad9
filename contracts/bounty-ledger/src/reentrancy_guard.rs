//! Single-entry lock around the ledger's token-moving entrypoints.
//!
//! `create_bounty` and `accept_submission` hand control to the token
//! contract. While either holds the lock, any call back into them panics.
//! The lock is one instance-storage key shared by both entrypoints, so a
//! payout cannot re-enter bounty creation and vice versa.
//!
//! The host discards every write of an invocation that panics or returns
//! `Err`, the lock included; only the success path has to `release`.

use crate::DataKey;
use soroban_sdk::Env;

const LOCK: DataKey = DataKey::ReentrancyGuard;

/// # Panics
/// With `"Reentrancy detected"` when the lock is already held.
pub fn acquire(env: &Env) {
    let instance = env.storage().instance();
    if instance.get::<_, bool>(&LOCK).unwrap_or(false) {
        panic!("Reentrancy detected");
    }
    instance.set(&LOCK, &true);
}

pub fn release(env: &Env) {
    env.storage().instance().remove(&LOCK);
}

#[cfg(test)]
pub fn is_active(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&LOCK)
        .unwrap_or(false)
}
