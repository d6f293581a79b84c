//! Status badges, score bars and action buttons.
//!
//! All coloring runs through `vs_core::classify` so the thresholds shown
//! here can never drift from the ones the pipeline applies.

use leptos::*;
use vs_core::{classify, route, FieldStatus, RecordStatus, ReviewAction};

/// Badge color classes for a trust/confidence score; pending (absent)
/// scores render in the warn palette.
pub fn score_classes(score: Option<u8>) -> &'static str {
    match score.map(classify) {
        Some(FieldStatus::Ok) => "bg-emerald-100 text-emerald-700",
        Some(FieldStatus::Fail) => "bg-red-100 text-red-700",
        _ => "bg-amber-100 text-amber-700",
    }
}

#[component]
pub fn StatusBadge(status: RecordStatus, score: Option<u8>) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", score_classes(score))>
            {status.to_string()}
        </span>
    }
}

/// Proportional bar standing in for the chart library; `value` is scaled
/// against `max`.
#[component]
pub fn ScoreBar(label: String, value: u32, max: u32) -> impl IntoView {
    let percent = if max == 0 { 0 } else { (value * 100) / max };
    let fill = match classify(percent.min(100) as u8) {
        FieldStatus::Ok => "bg-emerald-500",
        FieldStatus::Warn => "bg-amber-500",
        FieldStatus::Fail => "bg-red-500",
    };
    view! {
        <div class="flex items-center gap-3">
            <div class="w-28 text-sm font-medium text-gray-700">{label}</div>
            <div class="flex-1 h-2 rounded-full bg-gray-200 overflow-hidden">
                <div class=format!("h-full rounded-full {}", fill) style=format!("width: {}%", percent)></div>
            </div>
            <div class="w-10 text-xs text-right font-bold text-gray-700">{value}</div>
        </div>
    }
}

/// Sidebar-style section switch inside a dashboard.
#[component]
pub fn SectionButton(
    label: &'static str,
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || format!(
                "w-full flex items-center gap-3 p-3 rounded-md text-left {}",
                if active.get() { "bg-blue-50 text-blue-700 font-semibold" } else { "text-gray-700 hover:bg-gray-100" }
            )
            on:click=move |_| on_select.call(())
        >
            {label}
        </button>
    }
}

/// The operator action buttons a trust score routes to. Every button is an
/// acknowledgment-only placeholder: confirming performs no state change.
#[component]
pub fn TrustActions(score: u8) -> impl IntoView {
    let (action_label, classes, ack) = match route(score) {
        ReviewAction::AutoApprove => (
            "Auto-Approve",
            "bg-emerald-600 hover:bg-emerald-700",
            "Approved and forwarded to HR systems (demo)",
        ),
        ReviewAction::ManualReview => (
            "Send to Manual Review",
            "bg-amber-600 hover:bg-amber-700",
            "Queued for supervisor sign-off (demo)",
        ),
        ReviewAction::Escalate => (
            "Flag & Escalate",
            "bg-red-600 hover:bg-red-700",
            "Moved to investigation queue (demo)",
        ),
    };

    view! {
        <button
            class=format!("w-full text-white px-4 py-2 rounded-lg {}", classes)
            on:click=move |_| acknowledge(ack)
        >
            {action_label}
        </button>
    }
}

/// Blocking acknowledgment used by every simulated always-succeeding
/// action.
pub fn acknowledge(message: &str) {
    let _ = window().alert_with_message(message);
}
