//! Detail modal for one application, with the review actions.

use leptos::prelude::*;
use records::ApplicationStatus;

use super::status_badge::StatusBadge;

/// Actions offered in the modal, in button order.
pub const DETAIL_ACTIONS: [(ApplicationStatus, &str); 3] = [
    (ApplicationStatus::Approved, "Approve"),
    (ApplicationStatus::UnderReview, "Review"),
    (ApplicationStatus::Rejected, "Reject"),
];

#[component]
pub fn ApplicationDetail(
    #[prop(into)] title: String,
    status: ApplicationStatus,
    /// `(label, value)` rows, rendered in order.
    fields: Vec<(&'static str, String)>,
    #[prop(into)] busy: Signal<bool>,
    on_action: Callback<ApplicationStatus>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2>{title}</h2>
                    <StatusBadge label=status.label() tone=status.tone()/>
                </div>
                <dl class="modal__fields">
                    {fields
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            }
                        })
                        .collect_view()}
                </dl>
                <div class="modal__actions">
                    {DETAIL_ACTIONS
                        .into_iter()
                        .map(|(target, label)| {
                            view! {
                                <button
                                    class=format!("btn btn--{}", target.as_str())
                                    disabled=move || busy.get()
                                    on:click=move |_| on_action.run(target)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
