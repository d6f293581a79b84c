//! Student portal: upload, live extraction, results, history, wallet and
//! disputes.

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use vs_core::{
    seed, CertificateHistory, CertificateRecord, ConsensusProfile, ConsensusResult, DisputeLedger,
    ExtractionEvent, ExtractionRun, FieldExtraction, MockVerificationService, UploadedFile,
    VerificationService,
};

use crate::components::{
    acknowledge, BreakdownList, ConsensusPanel, ExtractionPanel, SectionButton, StatCard,
    StatusBadge, UploadPanel,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    Upload,
    Results,
    History,
    Wallet,
    Disputes,
}

const SECTIONS: [(Section, &str); 6] = [
    (Section::Overview, "Overview"),
    (Section::Upload, "Upload Certificate"),
    (Section::Results, "Verification Results"),
    (Section::History, "My Certificates"),
    (Section::Wallet, "Academic Wallet"),
    (Section::Disputes, "Disputes"),
];

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let (section, set_section) = create_signal(Section::Overview);
    let history = create_rw_signal(CertificateHistory::new(seed::student_history()));
    let ledger = create_rw_signal(DisputeLedger::new(seed::student_disputes()));

    // Live extraction state. The run itself lives outside the reactive
    // graph; only what the view renders is signal-backed.
    let service = store_value(MockVerificationService::new(
        seed::certificate_template(),
        ConsensusProfile::student(),
    ));
    let run = store_value(None::<ExtractionRun>);
    let interval = store_value(None::<IntervalHandle>);
    let (fields, set_fields) = create_signal(Vec::<FieldExtraction>::new());
    let (progress, set_progress) = create_signal(0u8);
    let (running, set_running) = create_signal(false);
    let (latest, set_latest) = create_signal(None::<CertificateRecord>);

    // Results state, recomputed each time a record's details are opened.
    let (selected, set_selected) = create_signal(None::<CertificateRecord>);
    let (consensus, set_consensus) = create_signal(None::<ConsensusResult>);

    // Dispute form state.
    let (dispute_cert, set_dispute_cert) = create_signal(String::new());
    let (dispute_reason, set_dispute_reason) = create_signal(String::new());
    let (dispute_error, set_dispute_error) = create_signal(None::<String>);

    let clear_interval = move || {
        interval.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        })
    };
    on_cleanup(clear_interval);

    // Re-triggering an upload always starts from a fresh run; the old
    // timer is cleared first so two runs can never interleave.
    let start_run = move |file: UploadedFile| {
        clear_interval();
        run.set_value(Some(service.with_value(|s| s.extract_fields(file))));
        set_fields.set(Vec::new());
        set_progress.set(0);
        set_latest.set(None);
        set_running.set(true);

        let tick = move || {
            let mut event = None;
            run.update_value(|r| {
                if let Some(r) = r {
                    event = r.advance();
                }
            });
            match event {
                Some(ExtractionEvent::Field(field)) => {
                    run.with_value(|r| {
                        if let Some(r) = r {
                            set_progress.set(r.progress());
                        }
                    });
                    set_fields.update(|f| f.push(field));
                }
                Some(ExtractionEvent::Complete(record)) => {
                    history.update(|h| h.prepend(record.clone()));
                    set_latest.set(Some(record));
                    set_running.set(false);
                    clear_interval();
                }
                None => clear_interval(),
            }
        };
        match set_interval_with_handle(tick, Duration::from_millis(800)) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => tracing::warn!(?err, "extraction interval not scheduled"),
        }
    };

    let open_details = move |record: CertificateRecord| {
        set_consensus.set(Some(service.with_value(|s| s.compute_consensus(&record))));
        set_selected.set(Some(record));
        set_section.set(Section::Results);
    };

    let submit_dispute = move |_| {
        let cert = dispute_cert.get();
        let cert = (!cert.trim().is_empty()).then_some(cert);
        let outcome = ledger
            .try_update(|l| l.submit(cert.as_deref(), &dispute_reason.get()))
            .unwrap_or_else(|| {
                Err(vs_core::CoreError::Dispute("ledger unavailable".into()))
            });
        match outcome {
            Ok(_) => {
                set_dispute_error.set(None);
                set_dispute_cert.set(String::new());
                set_dispute_reason.set(String::new());
                acknowledge("Dispute submitted. Our team will review it shortly.");
            }
            Err(err) => set_dispute_error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="flex gap-6">
            <aside class="w-64 bg-white rounded-lg shadow p-4 space-y-1 self-start">
                <h2 class="px-3 py-2 text-lg font-bold text-gray-900">"Student Portal"</h2>
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
                    Section::Overview => view! {
                        <Overview history=history on_open=Callback::new(open_details)/>
                    }.into_view(),
                    Section::Upload => view! {
                        <UploadSection
                            fields=fields.into()
                            progress=progress.into()
                            running=running.into()
                            latest=latest.into()
                            on_upload=Callback::new(start_run)
                            on_open=Callback::new(open_details)
                        />
                    }.into_view(),
                    Section::Results => view! {
                        <ResultsSection
                            selected=selected.into()
                            consensus=consensus.into()
                            on_dispute=Callback::new(move |cert_id: String| {
                                set_dispute_cert.set(cert_id);
                                set_section.set(Section::Disputes);
                            })
                        />
                    }.into_view(),
                    Section::History => view! {
                        <HistorySection history=history on_open=Callback::new(open_details)/>
                    }.into_view(),
                    Section::Wallet => view! { <WalletSection history=history/> }.into_view(),
                    Section::Disputes => view! {
                        <DisputesSection
                            ledger=ledger
                            cert=dispute_cert
                            set_cert=set_dispute_cert
                            reason=dispute_reason
                            set_reason=set_dispute_reason
                            error=dispute_error.into()
                            on_submit=Callback::new(submit_dispute)
                        />
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Overview(
    history: RwSignal<CertificateHistory>,
    on_open: Callback<CertificateRecord>,
) -> impl IntoView {
    let stats = move || history.with(|h| h.stats());
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Overview"</h1>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Total Certificates" value=move || stats().total.to_string() icon="\u{1F4C3}"/>
                <StatCard title="Verified" value=move || stats().verified.to_string() icon="\u{2705}"/>
                <StatCard title="Pending" value=move || stats().pending.to_string() icon="\u{23F3}"/>
                <StatCard title="Trust Score" value=move || format!("{}%", stats().trust_score) icon="\u{1F6E1}"/>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Monthly Activity"</h2>
                <div class="grid grid-cols-4 gap-4">
                    {seed::student_timeline().into_iter().map(|(month, uploads, verified, flagged)| view! {
                        <div class="text-center p-3 bg-gray-50 rounded-lg">
                            <div class="text-xs text-gray-500">{month}</div>
                            <div class="text-lg font-bold text-gray-900">{uploads}</div>
                            <div class="text-xs text-gray-400">
                                {format!("{verified} verified \u{b7} {flagged} flagged")}
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>
                <div class="space-y-2">
                    {move || history.with(|h| h.records().iter().take(3).cloned().collect::<Vec<_>>())
                        .into_iter().map(|record| {
                            let open = record.clone();
                            view! {
                                <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <div>
                                        <div class="text-sm font-medium text-gray-900">{record.title.clone()}</div>
                                        <div class="text-xs text-gray-500">{record.id.clone()} " \u{b7} " {record.date.to_string()}</div>
                                    </div>
                                    <div class="flex items-center gap-3">
                                        <StatusBadge status=record.status score=record.score/>
                                        <button
                                            class="text-sm text-blue-600 hover:underline"
                                            on:click=move |_| on_open.call(open.clone())
                                        >
                                            "Details"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn UploadSection(
    fields: Signal<Vec<FieldExtraction>>,
    progress: Signal<u8>,
    running: Signal<bool>,
    latest: Signal<Option<CertificateRecord>>,
    on_upload: Callback<UploadedFile>,
    on_open: Callback<CertificateRecord>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Upload Certificate"</h1>
            <div class="bg-white rounded-lg shadow p-6">
                <UploadPanel on_submit=on_upload/>
            </div>

            <Show when=move || running.get() || !fields.get().is_empty()>
                <div class="bg-white rounded-lg shadow p-6">
                    <ExtractionPanel progress=progress fields=fields/>
                </div>
            </Show>

            {move || latest.get().map(|record| {
                let open = record.clone();
                view! {
                    <div class="bg-white rounded-lg shadow p-6 flex items-center justify-between">
                        <div>
                            <div class="text-sm text-gray-500">"Extraction complete"</div>
                            <div class="text-lg font-semibold text-gray-900">
                                {record.id.clone()} " \u{b7} " {record.title.clone()}
                            </div>
                        </div>
                        <div class="flex items-center gap-3">
                            <StatusBadge status=record.status score=record.score/>
                            <button
                                class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg"
                                on:click=move |_| on_open.call(open.clone())
                            >
                                "View Results"
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[component]
fn ResultsSection(
    selected: Signal<Option<CertificateRecord>>,
    consensus: Signal<Option<ConsensusResult>>,
    on_dispute: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Verification Results"</h1>
            {move || match selected.get() {
                None => view! {
                    <div class="bg-white rounded-lg shadow p-10 text-center text-gray-500">
                        "Open a certificate from Overview or History to see its verification details."
                    </div>
                }.into_view(),
                Some(record) => {
                    let cert_id = record.id.clone();
                    let share_id = record.id.clone();
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
                                    {move || consensus.get().map(|c| view! { <ConsensusPanel consensus=c/> })}
                                </div>
                            </div>

                            <div class="space-y-6">
                                <div class="bg-white rounded-lg shadow p-6 space-y-2">
                                    <h2 class="text-xl font-semibold mb-2">"Actions"</h2>
                                    <button
                                        class="w-full bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg"
                                        on:click=move |_| acknowledge("Verified copy downloaded (demo)")
                                    >
                                        "Download Verified Copy"
                                    </button>
                                    <button
                                        class="w-full bg-gray-200 hover:bg-gray-300 text-gray-800 px-4 py-2 rounded-lg"
                                        on:click={
                                            let share_id = share_id.clone();
                                            move |_| share_link(&share_id)
                                        }
                                    >
                                        "Share Verification Link"
                                    </button>
                                    <button
                                        class="w-full bg-red-50 hover:bg-red-100 text-red-700 px-4 py-2 rounded-lg"
                                        on:click={
                                            let cert_id = cert_id.clone();
                                            move |_| on_dispute.call(cert_id.clone())
                                        }
                                    >
                                        "Raise Dispute"
                                    </button>
                                </div>
                                {record.hash.clone().map(|hash| view! {
                                    <div class="bg-white rounded-lg shadow p-6">
                                        <h2 class="text-xl font-semibold mb-2">"Ledger Anchor"</h2>
                                        <code class="block text-xs bg-gray-900 text-green-400 p-3 rounded-lg break-all">
                                            {hash}
                                        </code>
                                    </div>
                                })}
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Copy a (mock) public verification link. The write is fire-and-forget;
/// the acknowledgment does not wait for the promise.
fn share_link(cert_id: &str) {
    let link = format!("https://verisure.example/verify/{cert_id}");
    let _ = window().navigator().clipboard().write_text(&link);
    acknowledge("Verification link copied to clipboard");
}

#[component]
fn HistorySection(
    history: RwSignal<CertificateHistory>,
    on_open: Callback<CertificateRecord>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"My Certificates"</h1>
            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Certificate"</th>
                            <th class="px-6 py-3">"Issued"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3">"Trust"</th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {move || history.with(|h| h.records().to_vec()).into_iter().map(|record| {
                            let open = record.clone();
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4">
                                        <div class="text-sm font-medium text-gray-900">{record.title.clone()}</div>
                                        <div class="text-xs text-gray-500">{record.id.clone()}</div>
                                    </td>
                                    <td class="px-6 py-4 text-sm text-gray-600">{record.date.to_string()}</td>
                                    <td class="px-6 py-4"><StatusBadge status=record.status score=record.score/></td>
                                    <td class="px-6 py-4 text-sm font-bold text-gray-700">
                                        {record.score.map(|s| format!("{s}%")).unwrap_or_else(|| "\u{2014}".into())}
                                    </td>
                                    <td class="px-6 py-4 text-right">
                                        <button
                                            class="text-sm text-blue-600 hover:underline"
                                            on:click=move |_| on_open.call(open.clone())
                                        >
                                            "Details"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn WalletSection(history: RwSignal<CertificateHistory>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Academic Wallet"</h1>
            <p class="text-sm text-gray-500">"Verified credentials only; pending and flagged records never enter the wallet."</p>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {move || history.with(|h| h.verified()).into_iter().map(|record| view! {
                    <div class="bg-white rounded-lg shadow p-6 border-l-4 border-emerald-500">
                        <div class="flex items-center justify-between mb-2">
                            <h3 class="text-lg font-semibold text-gray-900">{record.title.clone()}</h3>
                            <StatusBadge status=record.status score=record.score/>
                        </div>
                        <div class="text-sm text-gray-600">{record.institution.clone()}</div>
                        <div class="text-xs text-gray-500 mt-1">{record.id.clone()} " \u{b7} " {record.date.to_string()}</div>
                        {record.hash.clone().map(|hash| view! {
                            <code class="block text-xs text-gray-400 mt-3 break-all">{hash}</code>
                        })}
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
#[allow(clippy::too_many_arguments)]
fn DisputesSection(
    ledger: RwSignal<DisputeLedger>,
    cert: ReadSignal<String>,
    set_cert: WriteSignal<String>,
    reason: ReadSignal<String>,
    set_reason: WriteSignal<String>,
    error: Signal<Option<String>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Disputes"</h1>

            <div class="bg-white rounded-lg shadow p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Raise a Dispute"</h2>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Certificate ID"</label>
                    <input
                        type="text"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg"
                        placeholder="CERT-001"
                        prop:value=cert
                        on:input=move |ev| set_cert.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-2">"Reason"</label>
                    <textarea
                        rows="3"
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg"
                        placeholder="What looks wrong?"
                        prop:value=reason
                        on:input=move |ev| set_reason.set(event_target_value(&ev))
                    ></textarea>
                </div>
                {move || error.get().map(|message| view! {
                    <p class="text-sm text-red-600">{message}</p>
                })}
                <button
                    class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-lg"
                    on:click=move |_| on_submit.call(())
                >
                    "Submit Dispute"
                </button>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4">"My Tickets"</h2>
                <div class="space-y-2">
                    {move || ledger.with(|l| l.tickets().to_vec()).into_iter().map(|ticket| view! {
                        <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                            <div>
                                <div class="text-sm font-medium text-gray-900">{ticket.id.clone()} " \u{b7} " {ticket.cert_id.clone()}</div>
                                <div class="text-xs text-gray-500">{ticket.reason.clone()}</div>
                            </div>
                            <span class="px-2 py-1 text-xs font-medium rounded-full bg-amber-100 text-amber-700">
                                {ticket.status.to_string()}
                            </span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
