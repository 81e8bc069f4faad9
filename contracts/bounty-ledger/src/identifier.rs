//! Bounty and submission identifiers.
//!
//! Identifiers are 32-byte values, conventionally the SHA-256 digest of the
//! payload held in the off-chain content store. The all-zero value is the
//! "no identifier" sentinel and is never assigned to a bounty or submission.

use crate::Error;
use soroban_sdk::{Bytes, BytesN, Env};

pub type Identifier = BytesN<32>;

const SENTINEL: [u8; 32] = [0u8; 32];

/// Returns `true` for the all-zero sentinel.
pub fn is_sentinel(id: &Identifier) -> bool {
    id.to_array() == SENTINEL
}

pub fn ensure_valid(id: &Identifier) -> Result<(), Error> {
    if is_sentinel(id) {
        return Err(Error::InvalidIdentifier);
    }
    Ok(())
}

/// Identifier a payload is stored under in the content store.
pub fn from_content(env: &Env, payload: &Bytes) -> Identifier {
    env.crypto().sha256(payload).into()
}
