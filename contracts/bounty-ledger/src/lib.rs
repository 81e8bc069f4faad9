#![no_std]
//! # Bounty Ledger Contract
//!
//! Escrow ledger for token-funded bounties. A creator locks tokens against a
//! bounty identifier, other parties record submissions against it, and the
//! creator either accepts exactly one submission (paying the escrowed amount
//! to its author and closing the bounty) or rejects submissions (leaving the
//! bounty open for more work).
//!
//! ## Lifecycle
//!
//! ```text
//! Bounty:      Open ──accept_submission──> Closed
//! Submission:  Pending ──accept_submission──> Accepted
//!                      └─reject_submission──> Rejected
//! ```
//!
//! Identifiers are 32-byte content hashes of payloads held off-chain (see
//! [`content_id`](BountyLedgerContract::content_id)); the zero value is
//! reserved and never names a bounty or submission.
//!
//! ## Funds
//!
//! The ledger escrows funds in its own contract address. Creating a bounty
//! pulls the amount from the creator through `transfer_from`, so the creator
//! must first `approve` the ledger on the token contract. Accepting a
//! submission transfers exactly the escrowed amount to the submitter, once.
//!
//! ## Circuit breaker
//!
//! The owner set at `init` can pause and resume the ledger, and can retire it
//! permanently. While paused or retired every mutating bounty/submission
//! entrypoint fails; read-only views keep working.
//!
//! ## Atomicity
//!
//! Entrypoints validate everything before their single token call and commit
//! registry changes after it. Soroban reverts the whole invocation, token
//! movements included, whenever an entrypoint returns `Err` or panics.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, Address, Bytes, BytesN, Env, Vec,
};

pub mod access;
pub mod bounty_registry;
mod events;
pub mod identifier;
mod invariants;
mod reentrancy_guard;
mod storage;
pub mod submission_registry;
pub mod token_ledger;
mod traits;

pub use access::AccessState;
pub use bounty_registry::{Bounty, BountyStatus};
pub use submission_registry::{Submission, SubmissionStatus};
pub use traits::BountyLedgerInterface;

use events::{
    emit_bounty_created, emit_ledger_initialized, emit_paused, emit_resumed, emit_retired,
    emit_submission_accepted, emit_submission_created, emit_submission_rejected, BountyCreated,
    BreakerChanged, LedgerInitialized, SubmissionAccepted, SubmissionCreated, SubmissionRejected,
    EVENT_VERSION_V1,
};
use token_ledger::{EscrowTokenLedger, TokenLedger};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Bounty or submission id is the all-zero sentinel
    InvalidIdentifier = 3,
    /// Bounty amount is zero or negative
    InvalidAmount = 4,
    /// Token id is not a contract address
    InvalidToken = 5,
    BountyExists = 6,
    SubmissionExists = 7,
    BountyClosed = 8,
    /// Bounty already has an accepted submission
    BountyResolved = 9,
    SubmissionNotPending = 10,
    AlreadyPaused = 11,
    NotPaused = 12,
    Retired = 13,
    Unauthorized = 14,
    Paused = 15,
    BountyNotFound = 16,
    SubmissionNotFound = 17,
    /// Caller balance or allowance does not cover the bounty amount
    TokenTransferFailed = 18,
    /// Escrow cannot cover a payout; escrow accounting is inconsistent
    EscrowShortfall = 19,
}

/// Coarse classification of [`Error`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    State,
    Authorization,
    Paused,
    NotFound,
    TokenTransfer,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidIdentifier | Error::InvalidAmount | Error::InvalidToken => {
                ErrorKind::Validation
            }
            Error::AlreadyInitialized
            | Error::NotInitialized
            | Error::BountyExists
            | Error::SubmissionExists
            | Error::BountyClosed
            | Error::BountyResolved
            | Error::SubmissionNotPending
            | Error::AlreadyPaused
            | Error::NotPaused
            | Error::Retired => ErrorKind::State,
            Error::Unauthorized => ErrorKind::Authorization,
            Error::Paused => ErrorKind::Paused,
            Error::BountyNotFound | Error::SubmissionNotFound => ErrorKind::NotFound,
            Error::TokenTransferFailed | Error::EscrowShortfall => ErrorKind::TokenTransfer,
        }
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Access,
    Token,
    TotalEscrowed,
    ReentrancyGuard,
    Bounty(BytesN<32>),
    BountyIndex, // Vec<BytesN<32>> of all bounty ids, creation order
    Submission(BytesN<32>),
    BountySubmissions(BytesN<32>), // bounty id -> Vec of submission ids
    AcceptedSubmission(BytesN<32>), // bounty id -> accepted submission id
}

#[contract]
pub struct BountyLedgerContract;

#[contractimpl]
impl BountyLedgerContract {
    /// Set the owner and the escrowed token. Call once.
    pub fn init(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if access::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        token_ledger::validate_token(&token)?;

        access::init(&env, &owner);
        env.storage().instance().set(&DataKey::Token, &token);
        storage::set_total_escrowed(&env, 0);
        storage::bump_instance(&env);

        emit_ledger_initialized(
            &env,
            LedgerInitialized {
                version: EVENT_VERSION_V1,
                owner,
                token,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Circuit breaker
    // ------------------------------------------------------------------

    /// Halt all bounty and submission mutations (owner only).
    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        let state = access::pause(&env, &caller)?;
        log!(&env, "ledger paused", caller);
        emit_paused(&env, Self::breaker_event(&env, state));
        Ok(())
    }

    /// Lift a pause (owner only).
    pub fn resume(env: Env, caller: Address) -> Result<(), Error> {
        let state = access::resume(&env, &caller)?;
        log!(&env, "ledger resumed", caller);
        emit_resumed(&env, Self::breaker_event(&env, state));
        Ok(())
    }

    /// Permanently retire the ledger (owner only). Nothing can undo this;
    /// recorded bounties and submissions stay readable.
    pub fn retire(env: Env, caller: Address) -> Result<(), Error> {
        let state = access::retire(&env, &caller)?;
        log!(&env, "ledger retired", caller);
        emit_retired(&env, Self::breaker_event(&env, state));
        Ok(())
    }

    pub fn get_access_state(env: Env) -> Result<AccessState, Error> {
        access::load(&env)
    }

    pub fn get_owner(env: Env) -> Option<Address> {
        access::peek(&env).map(|state| state.owner)
    }

    pub fn is_paused(env: Env) -> bool {
        access::peek(&env).map(|state| state.paused).unwrap_or(false)
    }

    pub fn is_retired(env: Env) -> bool {
        access::peek(&env).map(|state| state.retired).unwrap_or(false)
    }

    fn breaker_event(env: &Env, state: AccessState) -> BreakerChanged {
        BreakerChanged {
            version: EVENT_VERSION_V1,
            owner: state.owner,
            paused: state.paused,
            retired: state.retired,
            timestamp: env.ledger().timestamp(),
        }
    }

    // ------------------------------------------------------------------
    // Escrow operations
    // ------------------------------------------------------------------

    /// Create a bounty, escrowing `amount` tokens from `caller`.
    ///
    /// `caller` must have approved the ledger for at least `amount` on the
    /// token contract.
    ///
    /// # Reentrancy
    /// Protected by the reentrancy guard. All checks run before the inbound
    /// token transfer; the bounty is recorded only after it succeeds.
    pub fn create_bounty(
        env: Env,
        caller: Address,
        id: BytesN<32>,
        amount: i128,
    ) -> Result<(), Error> {
        access::guard(&env)?;
        caller.require_auth();

        // GUARD: acquire reentrancy lock
        reentrancy_guard::acquire(&env);

        bounty_registry::validate_new(&env, &id, amount)?;

        // INTERACTION: pull the reward into escrow before recording anything
        let ledger = EscrowTokenLedger::open(&env)?;
        ledger.pull_into_escrow(&caller, amount)?;

        // COMMIT
        let bounty = bounty_registry::create(&env, &id, amount, &caller)?;
        invariants::assert_bounty(&bounty);
        storage::set_total_escrowed(&env, storage::total_escrowed(&env) + amount);
        invariants::assert_escrow_covered(&env, &ledger);
        storage::bump_instance(&env);

        log!(&env, "bounty created", id.clone(), amount);
        emit_bounty_created(
            &env,
            BountyCreated {
                version: EVENT_VERSION_V1,
                bounty_id: id,
                creator: caller,
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        // GUARD: release reentrancy lock
        reentrancy_guard::release(&env);
        Ok(())
    }

    /// Record a submission by `caller` against an open bounty.
    pub fn create_submission(
        env: Env,
        caller: Address,
        bounty_id: BytesN<32>,
        id: BytesN<32>,
    ) -> Result<(), Error> {
        access::guard(&env)?;
        caller.require_auth();

        let bounty = bounty_registry::get(&env, &bounty_id)?;
        if Self::accepted_submission(&env, &bounty_id).is_some()
            || bounty.status == BountyStatus::Closed
        {
            return Err(Error::BountyResolved);
        }

        submission_registry::create(&env, &id, &bounty_id, &caller)?;
        storage::bump_instance(&env);

        emit_submission_created(
            &env,
            SubmissionCreated {
                version: EVENT_VERSION_V1,
                submission_id: id,
                bounty_id,
                submitter: caller,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Accept a submission: pay the escrowed amount to its author and close
    /// the bounty. Only the bounty's creator may accept.
    ///
    /// # Reentrancy
    /// Protected by the reentrancy guard. The payout is the only external
    /// call; submission, accepted map and bounty are committed together
    /// after it.
    pub fn accept_submission(
        env: Env,
        caller: Address,
        submission_id: BytesN<32>,
    ) -> Result<(), Error> {
        access::guard(&env)?;
        caller.require_auth();

        // GUARD: acquire reentrancy lock
        reentrancy_guard::acquire(&env);

        let submission = submission_registry::get(&env, &submission_id)?;
        let bounty = bounty_registry::get(&env, &submission.bounty_id)?;
        if caller != bounty.creator {
            return Err(Error::Unauthorized);
        }
        if submission.status != SubmissionStatus::Pending {
            return Err(Error::SubmissionNotPending);
        }
        if Self::accepted_submission(&env, &bounty.id).is_some() {
            return Err(Error::BountyResolved);
        }

        // INTERACTION: release the escrowed reward
        let ledger = EscrowTokenLedger::open(&env)?;
        ledger.pay_from_escrow(&submission.submitter, bounty.amount)?;

        // COMMIT
        submission_registry::accept(&env, &submission_id)?;
        let accepted_key = DataKey::AcceptedSubmission(bounty.id.clone());
        env.storage().persistent().set(&accepted_key, &submission_id);
        storage::bump_persistent(&env, &accepted_key);
        bounty_registry::close(&env, &bounty.id)?;
        storage::set_total_escrowed(&env, storage::total_escrowed(&env) - bounty.amount);
        invariants::assert_escrow_covered(&env, &ledger);
        storage::bump_instance(&env);

        log!(&env, "submission accepted", submission_id.clone(), bounty.amount);
        emit_submission_accepted(
            &env,
            SubmissionAccepted {
                version: EVENT_VERSION_V1,
                submission_id,
                bounty_id: bounty.id,
                recipient: submission.submitter,
                amount: bounty.amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        // GUARD: release reentrancy lock
        reentrancy_guard::release(&env);
        Ok(())
    }

    /// Reject a pending submission. No funds move and the bounty stays open.
    /// Only the bounty's creator may reject.
    pub fn reject_submission(
        env: Env,
        caller: Address,
        submission_id: BytesN<32>,
    ) -> Result<(), Error> {
        access::guard(&env)?;
        caller.require_auth();

        let submission = submission_registry::get(&env, &submission_id)?;
        let bounty = bounty_registry::get(&env, &submission.bounty_id)?;
        if caller != bounty.creator {
            return Err(Error::Unauthorized);
        }

        submission_registry::reject(&env, &submission_id)?;
        storage::bump_instance(&env);

        emit_submission_rejected(
            &env,
            SubmissionRejected {
                version: EVENT_VERSION_V1,
                submission_id,
                bounty_id: bounty.id,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Views (never guarded)
    // ------------------------------------------------------------------

    pub fn list_bounties(env: Env) -> Vec<BytesN<32>> {
        bounty_registry::list(&env)
    }

    /// Every submission for the bounty in creation order, and the rejected
    /// subset.
    pub fn list_submissions(env: Env, bounty_id: BytesN<32>) -> (Vec<BytesN<32>>, Vec<BytesN<32>>) {
        submission_registry::list_for_bounty(&env, &bounty_id)
    }

    pub fn get_accepted_submission(env: Env, bounty_id: BytesN<32>) -> Option<BytesN<32>> {
        Self::accepted_submission(&env, &bounty_id)
    }

    pub fn get_bounty(env: Env, id: BytesN<32>) -> Result<Bounty, Error> {
        bounty_registry::get(&env, &id)
    }

    pub fn get_submission(env: Env, id: BytesN<32>) -> Result<Submission, Error> {
        submission_registry::get(&env, &id)
    }

    pub fn get_token(env: Env) -> Option<Address> {
        token_ledger::configured_token(&env)
    }

    /// Tokens currently held by the ledger.
    pub fn get_escrow_balance(env: Env) -> Result<i128, Error> {
        let ledger = EscrowTokenLedger::open(&env)?;
        Ok(ledger.escrow_balance())
    }

    /// Sum of the amounts of all open bounties.
    pub fn get_total_escrowed(env: Env) -> i128 {
        storage::total_escrowed(&env)
    }

    /// Identifier the content store assigns to `payload`.
    pub fn content_id(env: Env, payload: Bytes) -> BytesN<32> {
        identifier::from_content(&env, &payload)
    }

    /// Check a bounty's amount and that it is closed exactly when a
    /// submission was accepted. Unknown bounties verify as `false`.
    pub fn verify_state(env: Env, bounty_id: BytesN<32>) -> bool {
        match bounty_registry::get(&env, &bounty_id) {
            Ok(bounty) => {
                let accepted = Self::accepted_submission(&env, &bounty_id).is_some();
                invariants::verify_bounty(&bounty, accepted)
            }
            Err(_) => false,
        }
    }

    fn accepted_submission(env: &Env, bounty_id: &BytesN<32>) -> Option<BytesN<32>> {
        env.storage()
            .persistent()
            .get(&DataKey::AcceptedSubmission(bounty_id.clone()))
    }
}

impl traits::BountyLedgerInterface for BountyLedgerContract {
    fn create_bounty(
        env: &Env,
        caller: Address,
        id: BytesN<32>,
        amount: i128,
    ) -> Result<(), crate::Error> {
        Self::create_bounty(env.clone(), caller, id, amount)
    }

    fn create_submission(
        env: &Env,
        caller: Address,
        bounty_id: BytesN<32>,
        id: BytesN<32>,
    ) -> Result<(), crate::Error> {
        Self::create_submission(env.clone(), caller, bounty_id, id)
    }

    fn accept_submission(
        env: &Env,
        caller: Address,
        submission_id: BytesN<32>,
    ) -> Result<(), crate::Error> {
        Self::accept_submission(env.clone(), caller, submission_id)
    }

    fn reject_submission(
        env: &Env,
        caller: Address,
        submission_id: BytesN<32>,
    ) -> Result<(), crate::Error> {
        Self::reject_submission(env.clone(), caller, submission_id)
    }

    fn list_bounties(env: &Env) -> Vec<BytesN<32>> {
        Self::list_bounties(env.clone())
    }

    fn list_submissions(
        env: &Env,
        bounty_id: BytesN<32>,
    ) -> (Vec<BytesN<32>>, Vec<BytesN<32>>) {
        Self::list_submissions(env.clone(), bounty_id)
    }

    fn get_accepted_submission(env: &Env, bounty_id: BytesN<32>) -> Option<BytesN<32>> {
        Self::get_accepted_submission(env.clone(), bounty_id)
    }
}

#[cfg(test)]
mod test_atomicity;
#[cfg(test)]
mod test_interface;
