//! Submission records and their Pending -> Accepted | Rejected lifecycle.
//!
//! Ids are unique across the whole ledger, not per bounty. Whether the target
//! bounty exists or is still open is checked by the contract entrypoints.

use crate::identifier::{self, Identifier};
use crate::{storage, DataKey, Error};
use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    Rejected,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub id: BytesN<32>,
    /// Bounty this submission answers; lookup only.
    pub bounty_id: BytesN<32>,
    pub submitter: Address,
    pub status: SubmissionStatus,
}

pub fn create(
    env: &Env,
    id: &Identifier,
    bounty_id: &Identifier,
    submitter: &Address,
) -> Result<Submission, Error> {
    identifier::ensure_valid(id)?;
    if env
        .storage()
        .persistent()
        .has(&DataKey::Submission(id.clone()))
    {
        return Err(Error::SubmissionExists);
    }

    let submission = Submission {
        id: id.clone(),
        bounty_id: bounty_id.clone(),
        submitter: submitter.clone(),
        status: SubmissionStatus::Pending,
    };
    save(env, &submission);

    let index_key = DataKey::BountySubmissions(bounty_id.clone());
    let mut index = ids_for_bounty(env, bounty_id);
    index.push_back(id.clone());
    env.storage().persistent().set(&index_key, &index);
    storage::bump_persistent(env, &index_key);

    Ok(submission)
}

pub fn get(env: &Env, id: &Identifier) -> Result<Submission, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Submission(id.clone()))
        .ok_or(Error::SubmissionNotFound)
}

pub fn accept(env: &Env, id: &Identifier) -> Result<Submission, Error> {
    transition(env, id, SubmissionStatus::Accepted)
}

pub fn reject(env: &Env, id: &Identifier) -> Result<Submission, Error> {
    transition(env, id, SubmissionStatus::Rejected)
}

fn transition(env: &Env, id: &Identifier, to: SubmissionStatus) -> Result<Submission, Error> {
    let mut submission = get(env, id)?;
    if submission.status != SubmissionStatus::Pending {
        return Err(Error::SubmissionNotPending);
    }
    submission.status = to;
    save(env, &submission);
    Ok(submission)
}

/// Every submission for `bounty_id` in creation order, and the rejected ones.
pub fn list_for_bounty(env: &Env, bounty_id: &Identifier) -> (Vec<Identifier>, Vec<Identifier>) {
    let all = ids_for_bounty(env, bounty_id);
    let mut rejected = Vec::new(env);
    for id in all.iter() {
        let rejected_here = get(env, &id)
            .map(|s| s.status == SubmissionStatus::Rejected)
            .unwrap_or(false);
        if rejected_here {
            rejected.push_back(id);
        }
    }
    (all, rejected)
}

fn ids_for_bounty(env: &Env, bounty_id: &Identifier) -> Vec<Identifier> {
    env.storage()
        .persistent()
        .get(&DataKey::BountySubmissions(bounty_id.clone()))
        .unwrap_or(Vec::new(env))
}

fn save(env: &Env, submission: &Submission) {
    let key = DataKey::Submission(submission.id.clone());
    env.storage().persistent().set(&key, submission);
    storage::bump_persistent(env, &key);
}
