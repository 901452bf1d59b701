//! Review panel shared by the volunteer and partnership pages.
//!
//! A transition is one effect for every action button: send the update,
//! apply the reducer locally on success, toast the result, then refetch the
//! whole list. Failures leave the list as it was. Each row kind supplies
//! its columns and detail fields through `PanelRow`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::{ApplicationRecord, ApplicationStatus};
use serde::de::DeserializeOwned;

use crate::components::application_detail::ApplicationDetail;
use crate::components::status_badge::StatusBadge;
use crate::state::review::{ReviewState, empty_message};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::{GateDecision, Requirement, install_session_guard, session_gate};

/// Number of kind-specific table columns before status, date and actions.
pub(crate) const IDENTITY_COLUMNS: usize = 4;

/// A row kind that can be listed in a review panel.
pub(crate) trait PanelRow: ApplicationRecord + DeserializeOwned + PartialEq + Send + Sync + 'static {
    const HEADING: &'static str;
    const SEARCH_PLACEHOLDER: &'static str;
    const COLUMNS: [&'static str; IDENTITY_COLUMNS];

    /// Modal title.
    fn title(&self) -> String;
    /// Table cells, one per entry of `COLUMNS`.
    fn cells(&self) -> [String; IDENTITY_COLUMNS];
    /// Calendar date for the Submitted column.
    fn submitted_on(&self) -> String;
    /// Every field, in modal order.
    fn detail_fields(&self) -> Vec<(&'static str, String)>;
}

/// Fetch the full list into `state`. Failures toast and empty the list.
pub(crate) fn load_applications<T: PanelRow>(state: RwSignal<ReviewState<T>>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_applications::<T>().await;
        if let Err(e) = &result {
            log::error!("{} fetch failed: {e}", T::API_SEGMENT);
            crate::state::toast::notify_error(toasts, crate::state::review::fetch_failed_message::<T>());
        }
        state.update(|s| s.apply_fetch(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, toasts);
}

/// Move `id` to `target`, report it, and refetch.
pub(crate) fn transition_and_refetch<T: PanelRow>(
    state: RwSignal<ReviewState<T>>,
    toasts: RwSignal<ToastState>,
    id: String,
    target: ApplicationStatus,
) {
    let started = state
        .try_update(|s| s.begin_update(&id))
        .unwrap_or(false);
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::update_application_status::<T>(&id, target).await;
        let message = state
            .try_update(|s| s.finish_update(&id, target, &result))
            .unwrap_or_default();
        match result {
            Ok(_) => {
                crate::state::toast::notify_success(toasts, message);
                load_applications(state, toasts);
            }
            Err(e) => {
                log::error!("status update for {id} failed: {e}");
                crate::state::toast::notify_error(toasts, message);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, id, target);
}

/// Admin-guarded list, search, table and detail modal for one row kind.
pub(crate) fn review_panel_view<T: PanelRow>() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_session_guard(session, Requirement::Admin, use_navigate());

    let state = RwSignal::new(ReviewState::<T>::default());
    let allowed = move || session.with(|s| session_gate(s, Requirement::Admin) == GateDecision::Allow);
    let loaded = StoredValue::new(false);

    Effect::new(move || {
        if allowed() && !loaded.get_value() {
            loaded.set_value(true);
            load_applications(state, toasts);
        }
    });

    let act = move |id: String, target: ApplicationStatus| transition_and_refetch(state, toasts, id, target);
    let busy = Signal::derive(move || state.with(|s| s.updating.is_some()));
    let visible = Memo::new(move |_| state.with(ReviewState::visible));

    view! {
        <Show when=allowed fallback=|| view! { <div class="page-loading">"Checking access..."</div> }>
            <div class="review-panel">
                <div class="review-panel__header">
                    <h1>{T::HEADING}</h1>
                    <span class="review-panel__count">{move || state.with(ReviewState::total)} " total"</span>
                </div>
                <input
                    class="review-panel__search"
                    type="search"
                    placeholder=T::SEARCH_PLACEHOLDER
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                />
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="muted">"Loading applications..."</p> }
                >
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <p class="muted">{empty_message::<T>()}</p> }
                    >
                        <table class="review-table">
                            <thead>
                                <tr>
                                    {T::COLUMNS.map(|column| view! { <th>{column}</th> }).to_vec()}
                                    <th>"Status"</th>
                                    <th>"Submitted"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|row| (row.id().to_owned(), row.status())
                                    children=move |row| {
                                        let open_id = row.id().to_owned();
                                        let approve_id = open_id.clone();
                                        let reject_id = open_id.clone();
                                        let status = row.status();
                                        view! {
                                            <tr
                                                class="review-table__row"
                                                on:click=move |_| state.update(|s| s.selected = Some(open_id.clone()))
                                            >
                                                {row.cells().map(|cell| view! { <td>{cell}</td> }).to_vec()}
                                                <td>
                                                    <StatusBadge label=status.label() tone=status.tone()/>
                                                </td>
                                                <td>{row.submitted_on()}</td>
                                                <td class="review-table__actions" on:click=|ev| ev.stop_propagation()>
                                                    <button
                                                        class="btn btn--approved"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| act(approve_id.clone(), ApplicationStatus::Approved)
                                                    >
                                                        "Approve"
                                                    </button>
                                                    <button
                                                        class="btn btn--rejected"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| act(reject_id.clone(), ApplicationStatus::Rejected)
                                                    >
                                                        "Reject"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </div>
            {move || {
                state
                    .with(|s| s.selected_row().cloned())
                    .map(|row| {
                        let id = row.id().to_owned();
                        view! {
                            <ApplicationDetail
                                title=row.title()
                                status=row.status()
                                fields=row.detail_fields()
                                busy=busy
                                on_action=Callback::new(move |target: ApplicationStatus| act(id.clone(), target))
                                on_close=Callback::new(move |()| state.update(|s| s.selected = None))
                            />
                        }
                    })
            }}
        </Show>
    }
}
