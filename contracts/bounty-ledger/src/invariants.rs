use crate::bounty_registry::{Bounty, BountyStatus};
use crate::storage;
use crate::token_ledger::TokenLedger;
use soroban_sdk::Env;

pub(crate) fn assert_bounty(bounty: &Bounty) {
    if bounty.amount <= 0 {
        panic!("Invariant violated: bounty amount must be positive");
    }
}

/// Open bounties are fully backed by tokens the ledger holds.
pub(crate) fn assert_escrow_covered(env: &Env, ledger: &impl TokenLedger) {
    let total = storage::total_escrowed(env);
    if total < 0 {
        panic!("Invariant violated: total escrowed must be non-negative");
    }
    if ledger.escrow_balance() < total {
        panic!("Invariant violated: escrow balance below total escrowed");
    }
}

pub(crate) fn verify_bounty(bounty: &Bounty, accepted: bool) -> bool {
    if bounty.amount <= 0 {
        return false;
    }
    // Closed exactly when a submission was accepted.
    (bounty.status == BountyStatus::Closed) == accepted
}
