//! Delegate dashboard: registration status, profile, admin link, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in landing route. The registration row is fetched once per
//! session epoch and only after the session has resolved to a user;
//! signed-out visitors are redirected before any fetch is issued.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::{Profile, RegistrationView};

use crate::components::status_badge::StatusBadge;
use crate::state::session::{SessionState, sign_out};
use crate::state::toast::{ToastState, notify_success};
use crate::util::auth::{Requirement, install_session_guard};

const NOT_SET: &str = "Not set";

/// Profile card rows, with "Not set" for missing values.
fn profile_rows(profile: Option<&Profile>, fallback_email: Option<&str>) -> Vec<(&'static str, String)> {
    let value = |v: Option<&str>| v.filter(|v| !v.is_empty()).unwrap_or(NOT_SET).to_owned();
    let email = profile
        .and_then(|p| p.email.as_deref())
        .filter(|e| !e.is_empty())
        .or(fallback_email);
    vec![
        ("Full Name", value(profile.and_then(|p| p.full_name.as_deref()))),
        ("Email", value(email)),
        ("School", value(profile.and_then(|p| p.school.as_deref()))),
        ("Grade", value(profile.and_then(|p| p.grade.as_deref()))),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    install_session_guard(session, Requirement::SignedIn, use_navigate());

    let view_model = RwSignal::new(None::<RegistrationView>);
    let fetched_epoch = StoredValue::new(None::<u64>);

    Effect::new(move || {
        let Some(epoch) = session.with(|s| s.is_signed_in().then_some(s.epoch)) else {
            return;
        };
        if fetched_epoch.get_value() == Some(epoch) {
            return;
        }
        fetched_epoch.set_value(Some(epoch));
        load_registration(view_model, toasts);
    });

    let on_sign_out = move |_| {
        sign_out(session, move || notify_success(toasts, "Signed out successfully"));
    };

    view! {
        <Show
            when=move || session.with(SessionState::is_signed_in)
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="dashboard">
                <section class="card dashboard__registration">
                    <h2>"Registration Status"</h2>
                    {move || match view_model.get() {
                        None => view! { <p class="muted">"Loading registration..."</p> }.into_any(),
                        Some(vm) => registration_view(vm),
                    }}
                </section>
                <aside class="dashboard__sidebar">
                    <section class="card">
                        <h3>"Your Profile"</h3>
                        <dl class="profile-card">
                            {move || {
                                let state = session.get();
                                profile_rows(state.profile.as_ref(), state.email())
                                    .into_iter()
                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                    .collect_view()
                            }}
                        </dl>
                    </section>
                    <Show when=move || session.with(|s| s.is_admin)>
                        <section class="card card--accent">
                            <h3>"Admin Access"</h3>
                            <a class="btn btn--primary" href="/admin">"Go to Admin Dashboard"</a>
                        </section>
                    </Show>
                    <button class="btn btn--danger" on:click=on_sign_out>"Sign Out"</button>
                </aside>
            </div>
        </Show>
    }
}

fn load_registration(view_model: RwSignal<Option<RegistrationView>>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let row = match crate::net::api::fetch_registration().await {
            Ok(row) => row,
            Err(e) => {
                log::error!("registration fetch failed: {e}");
                crate::state::toast::notify_error(toasts, "Failed to load registration");
                None
            }
        };
        view_model.set(Some(RegistrationView::from_row(row.as_ref())));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (view_model, toasts);
}

fn registration_view(vm: RegistrationView) -> AnyView {
    let Some(summary) = vm.summary().cloned() else {
        return view! {
            <div class="registration-cta">
                <p class="muted">"You haven't registered yet."</p>
                <a class="btn btn--primary" href="/register">"Register Now"</a>
            </div>
        }
        .into_any();
    };
    let assignment = vm.assignment().cloned();

    view! {
        <div class="registration">
            <div class="registration__status">
                <StatusBadge label=summary.status_label.clone() tone=summary.tone/>
                <span class="muted">"Payment: " {summary.payment_status.clone()}</span>
            </div>
            <dl class="registration__preferences">
                <dt>"Delegation Type"</dt>
                <dd>{summary.delegation_label}</dd>
                <dt>{format!("Preferred {}", summary.delegation_label)}</dt>
                <dd>{summary.preferred_value.clone()}</dd>
                <dt>"Committee Preference"</dt>
                <dd>{summary.committee_preference.clone()}</dd>
            </dl>
            {assignment
                .map(|panel| {
                    view! {
                        <div class="registration__assignment">
                            <h3>"Your Assignment"</h3>
                            <dl>
                                <dt>{panel.target_label}</dt>
                                <dd>{panel.target_value}</dd>
                                <dt>"Assigned Committee"</dt>
                                <dd>{panel.committee}</dd>
                            </dl>
                        </div>
                    }
                })}
        </div>
    }
    .into_any()
}
