//! Inline feedback note.
//!
//! Renders the outcome of a mutation next to the control that caused it.
//! Nothing renders while the slot is empty.

use leptos::prelude::*;

use crate::models::{Feedback, FeedbackKind};

stylance::import_crate_style!(css, "src/components/browser/feedback_note.module.css");

#[component]
pub fn FeedbackNote(feedback: RwSignal<Option<Feedback>>) -> impl IntoView {
    view! {
        {move || feedback.get().map(|note| {
            let class = match note.kind {
                FeedbackKind::Success => format!("{} {}", css::note, css::noteSuccess),
                FeedbackKind::Error => format!("{} {}", css::note, css::noteError),
            };
            view! { <span class=class>{note.message}</span> }
        })}
    }
}
