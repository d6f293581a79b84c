//! Verifier dashboard: quick verification, batch review, forensics and
//! integration tooling.

use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use vs_core::{
    seed, CertificateHistory, CertificateRecord, ConsensusProfile, ConsensusResult, LookupOutcome,
    MockVerificationService, ReviewAction, VerificationService,
};

use crate::components::{
    acknowledge, BreakdownList, ConsensusPanel, ScoreBar, SectionButton, StatCard, StatusBadge,
    TrustActions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    QuickVerify,
    Batch,
    Forensics,
    Integration,
}

const SECTIONS: [(Section, &str); 5] = [
    (Section::Overview, "Overview"),
    (Section::QuickVerify, "Quick Verify"),
    (Section::Batch, "Batch Verification"),
    (Section::Forensics, "Forensic View"),
    (Section::Integration, "Integration"),
];

/// What the one-shot quick verification is currently showing.
#[derive(Clone, PartialEq)]
enum Verdict {
    Idle,
    Checking,
    Found(CertificateRecord, ConsensusResult),
    NotFound(String),
}

#[component]
pub fn VerifierDashboard() -> impl IntoView {
    let (section, set_section) = create_signal(Section::Overview);

    // Quick-verify state: lookups run against the seeded registry slice
    // and resolve after a short simulated delay.
    let registry = store_value(CertificateHistory::new(seed::student_history()));
    let service = store_value(MockVerificationService::new(
        seed::certificate_template(),
        ConsensusProfile::verifier(),
    ));
    let (query, set_query) = create_signal(String::new());
    let (verdict, set_verdict) = create_signal(Verdict::Idle);
    let timeout = store_value(None::<TimeoutHandle>);

    let clear_timeout = move || {
        timeout.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        })
    };
    on_cleanup(clear_timeout);

    let run_lookup = move |_| {
        let id = query.get().trim().to_string();
        if id.is_empty() {
            return;
        }
        clear_timeout();
        set_verdict.set(Verdict::Checking);
        let resolve = move || {
            let outcome = registry.with_value(|r| r.lookup(&id));
            set_verdict.set(match outcome {
                LookupOutcome::Found(record) => {
                    let consensus = service.with_value(|s| s.compute_consensus(&record));
                    Verdict::Found(record, consensus)
                }
                LookupOutcome::NotFound => Verdict::NotFound(id.clone()),
            });
        };
        match set_timeout_with_handle(resolve, Duration::from_millis(1500)) {
            Ok(handle) => timeout.set_value(Some(handle)),
            Err(err) => tracing::warn!(?err, "verdict timeout not scheduled"),
        }
    };

    view! {
        <div class="flex gap-6">
            <aside class="w-64 bg-white rounded-lg shadow p-4 space-y-1 self-start">
                <h2 class="px-3 py-2 text-lg font-bold text-gray-900">"Verifier Dashboard"</h2>
                {SECTIONS.into_iter().map(|(target, label)| view! {
                    <SectionButton
                        label=label
                        active=Signal::derive(move || section.get() == target)
                        on_select=Callback::new(move |_| set_section.set(target))
                    />
                }).collect_view()}
            </aside>

            <div class="flex-1 space-y-6">
                {move || match section.get() {
                    Section::Overview => view! { <Overview/> }.into_view(),
                    Section::QuickVerify => view! {
                        <QuickVerify
                            query=query
                            set_query=set_query
                            verdict=verdict.into()
                            on_verify=Callback::new(run_lookup)
                        />
                    }.into_view(),
                    Section::Batch => view! { <BatchTable/> }.into_view(),
                    Section::Forensics => view! { <ForensicView/> }.into_view(),
                    Section::Integration => view! { <Integration/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let distribution = seed::trust_distribution();
    let trend = seed::flagged_trend();
    let dist_max = distribution.iter().map(|b| b.count).max().unwrap_or(1);
    let trend_max = trend.iter().map(|b| b.count).max().unwrap_or(1);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Overview"</h1>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Verified Today" value=|| "128".to_string() icon="\u{2705}"/>
                <StatCard title="Pending Review" value=|| "17".to_string() icon="\u{23F3}"/>
                <StatCard title="Flagged This Week" value=|| "9".to_string() icon="\u{1F6A9}"/>
                <StatCard title="Avg Trust Score" value=|| "87%".to_string() icon="\u{1F6E1}"/>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg shadow p-6 space-y-3">
                    <h2 class="text-xl font-semibold">"Trust Score Distribution"</h2>
                    {distribution.into_iter().map(|bucket| view! {
                        <ScoreBar label=bucket.label value=bucket.count max=dist_max/>
                    }).collect_view()}
                </div>
                <div class="bg-white rounded-lg shadow p-6 space-y-3">
                    <h2 class="text-xl font-semibold">"Flagged Certificates Trend"</h2>
                    {trend.into_iter().map(|bucket| view! {
                        <ScoreBar label=bucket.label value=bucket.count max=trend_max/>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn QuickVerify(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    verdict: Signal<Verdict>,
    on_verify: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Quick Verify"</h1>

            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex gap-3">
                    <input
                        type="text"
                        class="flex-1 px-4 py-2 border border-gray-300 rounded-lg"
                        placeholder="Enter certificate ID, e.g. CERT-001"
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button
                        class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-lg"
                        on:click=move |_| on_verify.call(())
                    >
                        "Verify"
                    </button>
                </div>
            </div>

            {move || match verdict.get() {
                Verdict::Idle => ().into_view(),
                Verdict::Checking => view! {
                    <div class="bg-white rounded-lg shadow p-10 text-center text-gray-500">
                        <div class="animate-pulse text-lg">"Checking registry, ledger and forensic signals..."</div>
                    </div>
                }.into_view(),
                Verdict::NotFound(id) => view! {
                    <div class="bg-white rounded-lg shadow p-10 text-center border-l-4 border-red-500">
                        <div class="text-lg font-semibold text-red-700">"Certificate not found"</div>
                        <p class="text-sm text-gray-500 mt-1">
                            {format!("No record matches \"{id}\". It may be unregistered or forged.")}
                        </p>
                    </div>
                }.into_view(),
                Verdict::Found(record, consensus) => view! {
                    <VerdictPanel record=record consensus=consensus/>
                }.into_view(),
            }}

            <ThresholdRules/>
        </div>
    }
}

#[component]
fn VerdictPanel(record: CertificateRecord, consensus: ConsensusResult) -> impl IntoView {
    let score = record.score;
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 space-y-6">
                <div class="bg-white rounded-lg shadow p-6">
                    <div class="flex items-center justify-between mb-4">
                        <div>
                            <h2 class="text-xl font-semibold">{record.title.clone()}</h2>
                            <p class="text-sm text-gray-500">
                                {record.id.clone()} " \u{b7} " {record.institution.clone()}
                            </p>
                        </div>
                        <StatusBadge status=record.status score=record.score/>
                    </div>
                    <BreakdownList/>
                </div>
                <div class="bg-white rounded-lg shadow p-6">
                    <ConsensusPanel consensus=consensus/>
                </div>
            </div>

            <div class="space-y-6">
                <div class="bg-white rounded-lg shadow p-6 space-y-2">
                    <h2 class="text-xl font-semibold mb-2">"Recommended Action"</h2>
                    {score.map(|s| view! { <TrustActions score=s/> })}
                    <button
                        class="w-full bg-gray-200 hover:bg-gray-300 text-gray-800 px-4 py-2 rounded-lg"
                        on:click=move |_| acknowledge("Result attached to employer report (demo)")
                    >
                        "Attach to Employer Report"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Static explanation of the routing bands applied to trust scores.
#[component]
fn ThresholdRules() -> impl IntoView {
    let rules = [
        ("90-100", "Auto-Approve", "bg-emerald-100 text-emerald-700"),
        ("70-89", "Manual Review", "bg-amber-100 text-amber-700"),
        ("0-69", "Flag & Escalate", "bg-red-100 text-red-700"),
    ];
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Threshold Rules"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {rules.into_iter().map(|(band, action, classes)| view! {
                    <div class=format!("p-4 rounded-lg {classes}")>
                        <div class="text-lg font-bold">{band}</div>
                        <div class="text-sm">{action}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BatchTable() -> impl IntoView {
    let rows = store_value(seed::batch_rows());
    let (search, set_search) = create_signal(String::new());

    let filtered = move || {
        let needle = search.get().to_lowercase();
        rows.with_value(|rows| {
            rows.iter()
                .filter(|row| {
                    needle.is_empty()
                        || row.id.to_lowercase().contains(&needle)
                        || row.name.to_lowercase().contains(&needle)
                        || row.university.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold text-gray-900">"Batch Verification"</h1>
                <button
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg"
                    on:click=move |_| acknowledge("Batch results exported as CSV (demo)")
                >
                    "Export Results"
                </button>
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <div class="p-4 border-b">
                    <input
                        type="text"
                        placeholder="Search by ID, name or university..."
                        class="w-full px-4 py-2 border rounded-lg"
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"ID"</th>
                            <th class="px-6 py-3">"Candidate"</th>
                            <th class="px-6 py-3">"University"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3">"Trust"</th>
                            <th class="px-6 py-3">"Action"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {move || filtered().into_iter().map(|row| view! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{row.id.clone()}</td>
                                <td class="px-6 py-4 text-sm text-gray-700">
                                    <div>{row.name.clone()}</div>
                                    <div class="text-xs text-gray-400">{row.job.clone()}</div>
                                </td>
                                <td class="px-6 py-4 text-sm text-gray-600">{row.university.clone()}</td>
                                <td class="px-6 py-4"><StatusBadge status=row.status score=row.trust/></td>
                                <td class="px-6 py-4 text-sm font-bold text-gray-700">
                                    {row.trust.map(|t| format!("{t}%")).unwrap_or_else(|| "\u{2014}".into())}
                                </td>
                                <td class="px-6 py-4">
                                    {match row.trust {
                                        Some(score) => view! { <BatchAction score=score/> }.into_view(),
                                        None => view! {
                                            <span class="text-xs text-gray-400">"Awaiting verification"</span>
                                        }.into_view(),
                                    }}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Compact per-row variant of the routed action button.
#[component]
fn BatchAction(score: u8) -> impl IntoView {
    let (label, classes, ack) = match vs_core::route(score) {
        ReviewAction::AutoApprove => (
            "Approve",
            "text-emerald-700 bg-emerald-50 hover:bg-emerald-100",
            "Candidate approved (demo)",
        ),
        ReviewAction::ManualReview => (
            "Review",
            "text-amber-700 bg-amber-50 hover:bg-amber-100",
            "Sent to manual review (demo)",
        ),
        ReviewAction::Escalate => (
            "Escalate",
            "text-red-700 bg-red-50 hover:bg-red-100",
            "Escalated to fraud team (demo)",
        ),
    };
    view! {
        <button
            class=format!("px-3 py-1 text-xs font-medium rounded-lg {classes}")
            on:click=move |_| acknowledge(ack)
        >
            {label}
        </button>
    }
}

#[component]
fn ForensicView() -> impl IntoView {
    let breakdown = seed::mock_breakdown();
    let anomalies = [
        ("Font inconsistency in marks field", "High"),
        ("Certificate ID not in issuing sequence", "High"),
        ("Seal position deviates from template", "Medium"),
        ("Paper texture watermark absent", "Low"),
    ];

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Forensic View"</h1>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="bg-white rounded-lg shadow p-6 space-y-3">
                    <h2 class="text-xl font-semibold">"Field Confidence"</h2>
                    {breakdown.into_iter().map(|(label, _, confidence)| view! {
                        <ScoreBar label=label value={u32::from(confidence)} max=100/>
                    }).collect_view()}
                </div>

                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Anomaly Report"</h2>
                    <div class="space-y-2">
                        {anomalies.into_iter().map(|(finding, severity)| {
                            let classes = match severity {
                                "High" => "bg-red-100 text-red-700",
                                "Medium" => "bg-amber-100 text-amber-700",
                                _ => "bg-gray-100 text-gray-600",
                            };
                            view! {
                                <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <span class="text-sm text-gray-700">{finding}</span>
                                    <span class=format!("px-2 py-1 text-xs font-bold rounded-full {classes}")>
                                        {severity}
                                    </span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                    <div class="mt-4 space-y-2">
                        <button
                            class="w-full bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-lg"
                            on:click=move |_| acknowledge("Case opened and assigned (demo)")
                        >
                            "Open Fraud Case"
                        </button>
                        <button
                            class="w-full bg-gray-200 hover:bg-gray-300 text-gray-800 px-4 py-2 rounded-lg"
                            on:click=move |_| acknowledge("Forensic report downloaded (demo)")
                        >
                            "Download Report"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

const EMBED_SNIPPET: &str = r#"<script src="https://verisure.example/widget.js"></script>
<div class="verisure-widget"
     data-api-key="vs_live_xxxxxxxx"
     data-mode="inline"></div>"#;

#[component]
fn Integration() -> impl IntoView {
    let copy_snippet = move |_| {
        let _ = window().navigator().clipboard().write_text(EMBED_SNIPPET);
        acknowledge("Embed snippet copied to clipboard");
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Integration"</h1>
            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-xl font-semibold">"Embed Verification Widget"</h2>
                    <button
                        class="bg-gray-200 hover:bg-gray-300 text-gray-800 px-4 py-2 rounded-lg text-sm"
                        on:click=copy_snippet
                    >
                        "Copy Snippet"
                    </button>
                </div>
                <pre class="bg-gray-900 text-green-400 text-xs p-4 rounded-lg overflow-x-auto">
                    {EMBED_SNIPPET}
                </pre>
                <p class="text-xs text-gray-400 mt-3">
                    "Drop this snippet into any careers portal to verify candidate certificates inline."
                </p>
            </div>
        </div>
    }
}
