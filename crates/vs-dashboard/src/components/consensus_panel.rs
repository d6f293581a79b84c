//! Cross-source consensus display.

use leptos::*;
use vs_core::ConsensusResult;

fn check_badge(label: &'static str, passed: bool) -> impl IntoView {
    let (classes, verdict) = if passed {
        ("bg-emerald-50 border-emerald-200 text-emerald-700", "Match")
    } else {
        ("bg-red-50 border-red-200 text-red-700", "Mismatch")
    };
    view! {
        <div class=format!("flex items-center justify-between p-3 border rounded-lg {}", classes)>
            <span class="text-sm font-medium">{label}</span>
            <span class="text-xs font-bold uppercase">{verdict}</span>
        </div>
    }
}

/// Four independent consensus checks for one certificate. Each check is
/// shown on its own; no combined verdict is derived from them.
#[component]
pub fn ConsensusPanel(consensus: ConsensusResult) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h4 class="text-sm font-semibold text-gray-900">"Cross-Source Consensus"</h4>
            {check_badge("National Registry", consensus.registry_match)}
            {check_badge("Institution Database", consensus.institution_db_match)}
            {check_badge("Blockchain Ledger", consensus.ledger_hash_present)}
            {check_badge("Forensic Analysis", consensus.forensic_clean)}
        </div>
    }
}
