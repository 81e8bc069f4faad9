//! Storage lifetime policy.
//!
//! Bounties and submissions are never deleted, so every persistent entry the
//! ledger writes is bumped on write to keep it live well past a typical
//! bounty's lifetime. Instance storage (access state, token, totals) is bumped
//! on every mutating call.

use crate::DataKey;
use soroban_sdk::Env;

/// Ledgers per day at ~5s close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Running sum of the amounts held for open bounties.
pub fn total_escrowed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalEscrowed)
        .unwrap_or(0)
}

pub fn set_total_escrowed(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalEscrowed, &total);
}
