use crate::identifier::Identifier;
use soroban_sdk::{Address, Env, Vec};

/// Operation surface of a bounty escrow ledger.
pub trait BountyLedgerInterface {
    /// Escrow `amount` from `caller` under a new bounty.
    fn create_bounty(
        env: &Env,
        caller: Address,
        id: Identifier,
        amount: i128,
    ) -> Result<(), crate::Error>;

    /// Record a submission against an open bounty.
    fn create_submission(
        env: &Env,
        caller: Address,
        bounty_id: Identifier,
        id: Identifier,
    ) -> Result<(), crate::Error>;

    /// Pay the bounty to the submission's author and close the bounty.
    fn accept_submission(
        env: &Env,
        caller: Address,
        submission_id: Identifier,
    ) -> Result<(), crate::Error>;

    /// Reject a pending submission, leaving the bounty open.
    fn reject_submission(
        env: &Env,
        caller: Address,
        submission_id: Identifier,
    ) -> Result<(), crate::Error>;

    fn list_bounties(env: &Env) -> Vec<Identifier>;

    fn list_submissions(env: &Env, bounty_id: Identifier) -> (Vec<Identifier>, Vec<Identifier>);

    fn get_accepted_submission(env: &Env, bounty_id: Identifier) -> Option<Identifier>;
}
