//! A failed call must leave no trace: balances, registries, the accepted map
//! and escrow totals are checked on either side of every rejected call.

#![cfg(test)]

use super::*;
use crate::test::{LedgerTest, ALICE_BALANCE, BOB_BALANCE};
use soroban_sdk::testutils::Address as _;

struct Snapshot {
    alice: i128,
    bob: i128,
    escrow: i128,
    total_escrowed: i128,
    bounties: u32,
    submissions: u32,
    rejected: u32,
}

fn snapshot(t: &LedgerTest, bounty: u8) -> Snapshot {
    let (all, rejected) = t.ledger.list_submissions(&t.id(bounty));
    Snapshot {
        alice: t.token.balance(&t.alice),
        bob: t.token.balance(&t.bob),
        escrow: t.token.balance(&t.ledger_id),
        total_escrowed: t.ledger.get_total_escrowed(),
        bounties: t.ledger.list_bounties().len(),
        submissions: all.len(),
        rejected: rejected.len(),
    }
}

fn assert_unchanged(before: &Snapshot, after: &Snapshot) {
    assert_eq!(before.alice, after.alice);
    assert_eq!(before.bob, after.bob);
    assert_eq!(before.escrow, after.escrow);
    assert_eq!(before.total_escrowed, after.total_escrowed);
    assert_eq!(before.bounties, after.bounties);
    assert_eq!(before.submissions, after.submissions);
    assert_eq!(before.rejected, after.rejected);
}

#[test]
fn test_failed_calls_leave_state_untouched() {
    let t = LedgerTest::new();
    t.ledger.create_bounty(&t.alice, &t.id(1), &3);
    t.ledger.create_submission(&t.bob, &t.id(1), &t.id(1));
    let before = snapshot(&t, 1);

    assert!(t.ledger.try_create_bounty(&t.alice, &t.id(1), &1).is_err());
    assert!(t.ledger.try_create_bounty(&t.alice, &t.id(2), &100).is_err());
    assert!(t.ledger.try_create_bounty(&t.alice, &t.id(0), &1).is_err());
    assert!(t.ledger.try_create_submission(&t.bob, &t.id(1), &t.id(1)).is_err());
    assert!(t.ledger.try_create_submission(&t.bob, &t.id(9), &t.id(2)).is_err());
    assert!(t.ledger.try_accept_submission(&t.bob, &t.id(1)).is_err());
    assert!(t.ledger.try_reject_submission(&t.bob, &t.id(1)).is_err());

    assert_unchanged(&before, &snapshot(&t, 1));
    assert_eq!(t.ledger.get_submission(&t.id(1)).status, SubmissionStatus::Pending);
    assert_eq!(t.ledger.get_bounty(&t.id(1)).status, BountyStatus::Open);
}

#[test]
fn test_payout_shortfall_aborts_acceptance() {
    let t = LedgerTest::new();
    let thief = Address::generate(&t.env);
    t.ledger.create_bounty(&t.alice, &t.id(1), &3);
    t.ledger.create_submission(&t.bob, &t.id(1), &t.id(1));

    // Drain escrow behind the ledger's back.
    t.token.transfer(&t.ledger_id, &thief, &3);
    assert_eq!(t.ledger.get_escrow_balance(), 0);

    assert_eq!(
        t.ledger.try_accept_submission(&t.alice, &t.id(1)),
        Err(Ok(Error::EscrowShortfall))
    );
    assert_eq!(t.token.balance(&t.bob), BOB_BALANCE);
    assert_eq!(t.ledger.get_submission(&t.id(1)).status, SubmissionStatus::Pending);
    assert_eq!(t.ledger.get_bounty(&t.id(1)).status, BountyStatus::Open);
    assert_eq!(t.ledger.get_accepted_submission(&t.id(1)), None);
    assert_eq!(t.ledger.get_total_escrowed(), 3);
    assert!(t.ledger.verify_state(&t.id(1)));
}

#[test]
fn test_reentrancy_guard_released_after_each_call() {
    let t = LedgerTest::new();

    t.ledger.create_bounty(&t.alice, &t.id(1), &3);
    t.env.as_contract(&t.ledger_id, || {
        assert!(!reentrancy_guard::is_active(&t.env));
    });

    t.ledger.create_submission(&t.bob, &t.id(1), &t.id(1));
    t.ledger.accept_submission(&t.alice, &t.id(1));
    t.env.as_contract(&t.ledger_id, || {
        assert!(!reentrancy_guard::is_active(&t.env));
    });

    // A failed call is rolled back along with the guard it acquired.
    assert!(t.ledger.try_create_bounty(&t.alice, &t.id(2), &100).is_err());
    t.env.as_contract(&t.ledger_id, || {
        assert!(!reentrancy_guard::is_active(&t.env));
    });
    t.ledger.create_bounty(&t.alice, &t.id(2), &2);
}

#[test]
#[should_panic(expected = "Reentrancy detected")]
fn test_reentrant_call_panics() {
    let t = LedgerTest::new();
    t.env.as_contract(&t.ledger_id, || {
        reentrancy_guard::acquire(&t.env);
        reentrancy_guard::acquire(&t.env);
    });
}

#[test]
fn test_escrow_accounting_matches_token_balance() {
    let t = LedgerTest::new();
    t.fund(&t.charlie, 30);

    t.ledger.create_bounty(&t.alice, &t.id(1), &ALICE_BALANCE);
    t.ledger.create_bounty(&t.bob, &t.id(2), &BOB_BALANCE);
    t.ledger.create_bounty(&t.charlie, &t.id(3), &30);
    assert_eq!(t.ledger.get_total_escrowed(), 60);
    assert_eq!(t.ledger.get_escrow_balance(), 60);

    t.ledger.create_submission(&t.bob, &t.id(1), &t.id(10));
    t.ledger.create_submission(&t.alice, &t.id(3), &t.id(11));
    t.ledger.reject_submission(&t.alice, &t.id(10));
    t.ledger.accept_submission(&t.charlie, &t.id(11));

    assert_eq!(t.ledger.get_total_escrowed(), 30);
    assert_eq!(t.ledger.get_escrow_balance(), 30);
    assert_eq!(t.token.balance(&t.alice), 30);
    assert_eq!(t.token.balance(&t.bob), 0);
}
