use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env};

pub const EVENT_VERSION_V1: u32 = 1;

#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerInitialized {
    pub version: u32,
    pub owner: Address,
    pub token: Address,
    pub timestamp: u64,
}

pub fn emit_ledger_initialized(env: &Env, event: LedgerInitialized) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, event.clone());
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BountyCreated {
    pub version: u32,
    pub bounty_id: BytesN<32>,
    pub creator: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_bounty_created(env: &Env, event: BountyCreated) {
    let topics = (symbol_short!("b_create"), event.bounty_id.clone());
    env.events().publish(topics, event.clone());
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubmissionCreated {
    pub version: u32,
    pub submission_id: BytesN<32>,
    pub bounty_id: BytesN<32>,
    pub submitter: Address,
    pub timestamp: u64,
}

pub fn emit_submission_created(env: &Env, event: SubmissionCreated) {
    let topics = (symbol_short!("s_create"), event.bounty_id.clone());
    env.events().publish(topics, event.clone());
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubmissionAccepted {
    pub version: u32,
    pub submission_id: BytesN<32>,
    pub bounty_id: BytesN<32>,
    pub recipient: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_submission_accepted(env: &Env, event: SubmissionAccepted) {
    let topics = (symbol_short!("s_accept"), event.bounty_id.clone());
    env.events().publish(topics, event.clone());
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubmissionRejected {
    pub version: u32,
    pub submission_id: BytesN<32>,
    pub bounty_id: BytesN<32>,
    pub timestamp: u64,
}

pub fn emit_submission_rejected(env: &Env, event: SubmissionRejected) {
    let topics = (symbol_short!("s_reject"), event.bounty_id.clone());
    env.events().publish(topics, event.clone());
}

/// Published on every pause, resume and retire.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BreakerChanged {
    pub version: u32,
    pub owner: Address,
    pub paused: bool,
    pub retired: bool,
    pub timestamp: u64,
}

pub fn emit_paused(env: &Env, event: BreakerChanged) {
    let topics = (symbol_short!("breaker"), symbol_short!("pause"));
    env.events().publish(topics, event.clone());
}

pub fn emit_resumed(env: &Env, event: BreakerChanged) {
    let topics = (symbol_short!("breaker"), symbol_short!("resume"));
    env.events().publish(topics, event.clone());
}

pub fn emit_retired(env: &Env, event: BreakerChanged) {
    let topics = (symbol_short!("breaker"), symbol_short!("retire"));
    env.events().publish(topics, event.clone());
}
