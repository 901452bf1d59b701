use records::SessionUser;

use super::*;

fn state(user: bool, is_admin: bool, loading: bool) -> SessionState {
    SessionState {
        user: user.then(|| SessionUser { id: "u1".to_owned(), email: Some("u1@example.org".to_owned()) }),
        profile: None,
        is_admin,
        loading,
        epoch: 1,
        signed_out: false,
    }
}

#[test]
fn waits_while_loading() {
    assert_eq!(session_gate(&state(false, false, true), Requirement::SignedIn), GateDecision::Wait);
    assert_eq!(session_gate(&state(true, true, true), Requirement::Admin), GateDecision::Wait);
}

#[test]
fn signed_out_goes_to_login() {
    assert_eq!(
        session_gate(&state(false, false, false), Requirement::SignedIn),
        GateDecision::Redirect("/login")
    );
    assert_eq!(
        session_gate(&state(false, false, false), Requirement::Admin),
        GateDecision::Redirect("/login")
    );
}

#[test]
fn signed_in_user_passes_signed_in_routes() {
    assert_eq!(session_gate(&state(true, false, false), Requirement::SignedIn), GateDecision::Allow);
}

#[test]
fn non_admin_goes_to_dashboard() {
    assert_eq!(
        session_gate(&state(true, false, false), Requirement::Admin),
        GateDecision::Redirect("/dashboard")
    );
}

#[test]
fn admin_passes_admin_routes() {
    assert_eq!(session_gate(&state(true, true, false), Requirement::Admin), GateDecision::Allow);
}

#[test]
fn deliberate_sign_out_goes_home() {
    let mut signed_out = state(true, true, false);
    signed_out.finish_sign_out();
    assert_eq!(session_gate(&signed_out, Requirement::SignedIn), GateDecision::Redirect("/"));
    assert_eq!(session_gate(&signed_out, Requirement::Admin), GateDecision::Redirect("/"));
}
