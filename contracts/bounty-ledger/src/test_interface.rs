#![cfg(test)]
//! Drives the ledger through [`BountyLedgerInterface`] rather than the
//! generated client, the way an embedding contract would.
//!
//! The host authorizes a contract frame at most once, so every call that
//! authenticates its caller runs in its own `as_contract` frame.

use super::*;
use crate::test::{LedgerTest, ALICE_BALANCE, BOB_BALANCE};

type Contract = BountyLedgerContract;

fn interface_test<'a>() -> LedgerTest<'a> {
    let env = Env::default();
    env.mock_all_auths_allowing_non_root_auth();
    LedgerTest::with_env(env)
}

/// Run `f` as the ledger contract, in a fresh frame.
fn in_ledger<T>(t: &LedgerTest, f: impl FnOnce() -> T) -> T {
    t.env.as_contract(&t.ledger_id, f)
}

#[test]
fn test_interface_full_flow() {
    let t = interface_test();
    let (bounty, accepted, rejected) = (t.id(1), t.id(2), t.id(3));

    in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::create_bounty(
            &t.env,
            t.alice.clone(),
            bounty.clone(),
            4,
        )
    })
    .unwrap();
    in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::create_submission(
            &t.env,
            t.bob.clone(),
            bounty.clone(),
            accepted.clone(),
        )
    })
    .unwrap();
    in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::create_submission(
            &t.env,
            t.charlie.clone(),
            bounty.clone(),
            rejected.clone(),
        )
    })
    .unwrap();
    in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::reject_submission(
            &t.env,
            t.alice.clone(),
            rejected.clone(),
        )
    })
    .unwrap();
    in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::accept_submission(
            &t.env,
            t.alice.clone(),
            accepted.clone(),
        )
    })
    .unwrap();

    in_ledger(&t, || {
        let ids = <Contract as BountyLedgerInterface>::list_bounties(&t.env);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids.get(0).unwrap(), bounty);

        let (all, rejected_ids) =
            <Contract as BountyLedgerInterface>::list_submissions(&t.env, bounty.clone());
        assert_eq!(all.len(), 2);
        assert_eq!(rejected_ids.len(), 1);
        assert_eq!(rejected_ids.get(0).unwrap(), rejected);

        assert_eq!(
            <Contract as BountyLedgerInterface>::get_accepted_submission(&t.env, bounty.clone()),
            Some(accepted.clone())
        );
    });

    assert_eq!(t.token.balance(&t.alice), ALICE_BALANCE - 4);
    assert_eq!(t.token.balance(&t.bob), BOB_BALANCE + 4);
    assert_eq!(t.token.balance(&t.ledger_id), 0);
    assert_eq!(t.ledger.get_bounty(&bounty).status, BountyStatus::Closed);
}

#[test]
fn test_interface_reports_errors() {
    let t = interface_test();
    t.ledger.create_bounty(&t.alice, &t.id(1), &2);
    t.ledger.create_submission(&t.bob, &t.id(1), &t.id(5));

    let not_creator = in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::reject_submission(&t.env, t.bob.clone(), t.id(5))
    });
    assert_eq!(not_creator, Err(Error::Unauthorized));

    let unknown_bounty = in_ledger(&t, || {
        <Contract as BountyLedgerInterface>::create_submission(
            &t.env,
            t.bob.clone(),
            t.id(9),
            t.id(6),
        )
    });
    assert_eq!(unknown_bounty, Err(Error::BountyNotFound));

    in_ledger(&t, || {
        assert_eq!(
            <Contract as BountyLedgerInterface>::get_accepted_submission(&t.env, t.id(1)),
            None
        );
    });

    assert_eq!(
        t.ledger.get_submission(&t.id(5)).status,
        SubmissionStatus::Pending
    );
}
