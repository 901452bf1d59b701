use super::*;

fn authorized() -> GateEvent {
    GateEvent::Outcome(AccessOutcome::Authorized { email: "root@modelwef.com".to_owned() })
}

fn denied() -> GateEvent {
    GateEvent::Outcome(AccessOutcome::Denied { email: "visitor@example.org".to_owned() })
}

#[test]
fn starts_checking() {
    assert_eq!(GateState::default(), GateState::Checking);
}

#[test]
fn no_identity_goes_idle() {
    let next = GateState::Checking.next(GateEvent::Outcome(AccessOutcome::NoIdentity));
    assert_eq!(next, GateState::Idle);
}

#[test]
fn allow_listed_goes_to_redirect_without_denial() {
    let next = GateState::Checking.next(authorized());
    assert_eq!(next, GateState::AuthorizedRedirect);
    assert_eq!(next.denied_email(), None);
}

#[test]
fn refused_goes_denied_with_email() {
    let next = GateState::Checking.next(denied());
    assert_eq!(next.denied_email(), Some("visitor@example.org"));
}

#[test]
fn sign_in_again_clears_denial_and_rechecks() {
    let denied_state = GateState::Checking.next(denied());
    let next = denied_state.next(GateEvent::SignInAgain);
    assert_eq!(next, GateState::Checking);
    assert_eq!(next.denied_email(), None);
}

#[test]
fn auth_change_restarts_check_from_any_open_state() {
    for state in [GateState::Idle, GateState::Checking, GateState::Denied { email: "x@y.z".to_owned() }] {
        assert_eq!(state.next(GateEvent::AuthChanged), GateState::Checking);
    }
}

#[test]
fn authorized_redirect_is_terminal() {
    let state = GateState::AuthorizedRedirect;
    assert_eq!(state.next(GateEvent::AuthChanged), GateState::AuthorizedRedirect);
    assert_eq!(state.next(denied()), GateState::AuthorizedRedirect);
}

#[test]
fn stale_outcomes_outside_checking_are_ignored() {
    assert_eq!(GateState::Idle.next(authorized()), GateState::Idle);
    let denied_state = GateState::Denied { email: "a@b.c".to_owned() };
    assert_eq!(denied_state.next(authorized()), denied_state);
}

#[test]
fn failed_check_falls_back_to_idle() {
    assert_eq!(GateState::Checking.next(GateEvent::CheckFailed), GateState::Idle);
}
