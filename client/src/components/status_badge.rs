//! Colored status pill.

use leptos::prelude::*;
use records::StatusTone;

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: StatusTone) -> impl IntoView {
    let class = format!("status-badge {}", tone.css_class());
    view! { <span class=class>{label}</span> }
}
