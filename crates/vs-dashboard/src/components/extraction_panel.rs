//! Live extraction progress and the itemized score breakdown.

use leptos::*;
use vs_core::{seed, FieldExtraction, FieldStatus};

use super::badges::score_classes;

fn status_icon(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Ok => "\u{2713}",
        FieldStatus::Warn => "\u{26A0}",
        FieldStatus::Fail => "\u{2715}",
    }
}

/// Progress bar plus the fields revealed so far, in extraction order.
#[component]
pub fn ExtractionPanel(
    progress: Signal<u8>,
    fields: Signal<Vec<FieldExtraction>>,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div>
                <div class="flex justify-between text-sm mb-1">
                    <span class="font-medium text-gray-700">"Extracting fields..."</span>
                    <span class="font-bold text-blue-600">{move || format!("{}%", progress.get())}</span>
                </div>
                <div class="h-2 rounded-full bg-gray-200 overflow-hidden">
                    <div
                        class="h-full bg-blue-600 rounded-full transition-all"
                        style=move || format!("width: {}%", progress.get())
                    ></div>
                </div>
            </div>
            <div class="space-y-2">
                {move || fields.get().into_iter().map(|field| view! {
                    <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                        <div>
                            <div class="text-xs text-gray-500">{field.label.clone()}</div>
                            <div class="text-sm font-medium text-gray-900">{field.value.clone()}</div>
                        </div>
                        <span class=format!(
                            "px-2 py-1 text-xs font-bold rounded-full {}",
                            score_classes(Some(field.confidence)),
                        )>
                            {format!("{} {}%", status_icon(field.status), field.confidence)}
                        </span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Itemized trust breakdown. The line items are a fixed illustrative set
/// and are not recomputed from any particular record.
#[component]
pub fn BreakdownList() -> impl IntoView {
    let items = seed::mock_breakdown();
    view! {
        <div class="space-y-2">
            <h4 class="text-sm font-semibold text-gray-900">"Score Breakdown"</h4>
            {items.into_iter().map(|(label, value, confidence)| view! {
                <div class="flex items-center justify-between p-2 border-b border-gray-100">
                    <div>
                        <span class="text-sm text-gray-600">{label}</span>
                        <span class="ml-2 text-sm font-medium text-gray-900">{value}</span>
                    </div>
                    <span class=format!(
                        "px-2 py-0.5 text-xs font-bold rounded-full {}",
                        score_classes(Some(confidence)),
                    )>
                        {format!("{}%", confidence)}
                    </span>
                </div>
            }).collect_view()}
            <div class="flex items-center justify-between pt-2">
                <span class="text-sm font-semibold text-gray-900">"Overall Trust Score"</span>
                <span class="text-lg font-bold text-amber-600">
                    {format!("{}%", seed::MOCK_BREAKDOWN_TRUST)}
                </span>
            </div>
        </div>
    }
}
