//! Registrar portal: issuance KPIs, template wizard, keys, disputes and
//! reputation.

use leptos::*;
use vs_core::{seed, UploadedFile};

use crate::components::{acknowledge, ScoreBar, SectionButton, StatCard, UploadPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    Templates,
    BulkIssue,
    Keys,
    Disputes,
    Reputation,
}

const SECTIONS: [(Section, &str); 6] = [
    (Section::Overview, "Overview"),
    (Section::Templates, "Certificate Templates"),
    (Section::BulkIssue, "Bulk Issuance"),
    (Section::Keys, "Signing Keys"),
    (Section::Disputes, "Dispute Queue"),
    (Section::Reputation, "Reputation"),
];

#[component]
pub fn InstitutionDashboard() -> impl IntoView {
    let (section, set_section) = create_signal(Section::Overview);

    view! {
        <div class="flex gap-6">
            <aside class="w-64 bg-white rounded-lg shadow p-4 space-y-1 self-start">
                <h2 class="px-3 py-2 text-lg font-bold text-gray-900">"Registrar Portal"</h2>
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
                    Section::Templates => view! { <TemplateManager/> }.into_view(),
                    Section::BulkIssue => view! { <BulkIssue/> }.into_view(),
                    Section::Keys => view! { <KeyTable/> }.into_view(),
                    Section::Disputes => view! { <DisputeQueue/> }.into_view(),
                    Section::Reputation => view! { <Reputation/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let kpis = seed::institution_kpis();
    let issuance = seed::monthly_issuance();
    let max = issuance.iter().map(|(_, issued, _)| *issued).max().unwrap_or(1);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Overview"</h1>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard
                    title="Certificates Issued"
                    value=move || format!("{} / {}", kpis.issued, kpis.quota)
                    icon="\u{1F4DC}"
                />
                <StatCard title="Active Templates" value=move || kpis.templates.to_string() icon="\u{1F4D0}"/>
                <StatCard title="Open Disputes" value=move || kpis.disputes.to_string() icon="\u{2696}"/>
                <StatCard title="Institution Trust" value=move || format!("{}%", kpis.trust_score) icon="\u{1F6E1}"/>
            </div>

            <div class="bg-white rounded-lg shadow p-6 space-y-3">
                <div class="flex justify-between items-center">
                    <h2 class="text-xl font-semibold">"Monthly Issuance"</h2>
                    <span class="text-xs text-gray-400">
                        {format!("{} retroactive registrations this quarter", kpis.retroactive)}
                    </span>
                </div>
                {issuance.into_iter().map(|(month, issued, _)| view! {
                    <ScoreBar label=month value=issued max=max/>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TemplateManager() -> impl IntoView {
    let templates = seed::certificate_templates();
    let (step, set_step) = create_signal(1u8);
    let (sample, set_sample) = create_signal(None::<String>);

    let on_sample = Callback::new(move |file: UploadedFile| {
        set_sample.set(Some(file.name));
        set_step.set(2);
    });
    let publish = move |_| {
        acknowledge("Template published and queued for review (demo)");
        set_step.set(1);
        set_sample.set(None);
    };

    let mapped_fields = [
        ("Name", "student.full_name"),
        ("Roll No", "student.roll_no"),
        ("Course", "program.title"),
        ("Marks", "result.aggregate"),
        ("Certificate ID", "issuance.cert_id"),
    ];

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Certificate Templates"</h1>

            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex items-center gap-2 mb-6">
                    {[(1u8, "Upload Sample"), (2, "Map Fields"), (3, "Review & Publish")]
                        .into_iter().map(|(n, label)| view! {
                            <div class=move || format!(
                                "flex-1 text-center py-2 text-sm font-medium rounded-lg {}",
                                if step.get() >= n { "bg-blue-600 text-white" } else { "bg-gray-100 text-gray-500" }
                            )>
                                {format!("{n}. {label}")}
                            </div>
                        }).collect_view()}
                </div>

                {move || match step.get() {
                    1 => view! { <UploadPanel on_submit=on_sample/> }.into_view(),
                    2 => view! {
                        <div class="space-y-3">
                            {sample.get().map(|name| view! {
                                <p class="text-sm text-gray-500">"Sample: " <span class="font-medium">{name}</span></p>
                            })}
                            {mapped_fields.into_iter().map(|(field, binding)| view! {
                                <div class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <span class="text-sm font-medium text-gray-900">{field}</span>
                                    <code class="text-xs text-gray-500">{binding}</code>
                                </div>
                            }).collect_view()}
                            <button
                                class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-lg"
                                on:click=move |_| set_step.set(3)
                            >
                                "Continue"
                            </button>
                        </div>
                    }.into_view(),
                    _ => view! {
                        <div class="space-y-4 text-center">
                            <p class="text-gray-600">"All 5 fields mapped. Publishing makes this template available to every department."</p>
                            <button
                                class="bg-emerald-600 hover:bg-emerald-700 text-white px-6 py-2 rounded-lg"
                                on:click=publish
                            >
                                "Publish Template"
                            </button>
                        </div>
                    }.into_view(),
                }}
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Template"</th>
                            <th class="px-6 py-3">"Fields"</th>
                            <th class="px-6 py-3">"Last Updated"</th>
                            <th class="px-6 py-3">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {templates.into_iter().map(|t| view! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{t.name}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{t.fields}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{t.last_updated.to_string()}</td>
                                <td class="px-6 py-4">
                                    <span class="px-2 py-1 text-xs font-medium rounded-full bg-blue-100 text-blue-800">
                                        {t.status}
                                    </span>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn BulkIssue() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Bulk Issuance"</h1>
            <div class="bg-white rounded-lg shadow p-10 text-center space-y-4">
                <div class="text-4xl">"\u{1F4E6}"</div>
                <p class="text-gray-600">"Upload a CSV of graduates to issue signed certificates in one batch."</p>
                <button
                    class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-lg"
                    on:click=move |_| acknowledge("Batch of 250 certificates queued for signing (demo)")
                >
                    "Upload Graduate Roster"
                </button>
            </div>
        </div>
    }
}

#[component]
fn KeyTable() -> impl IntoView {
    let keys = seed::signing_keys();
    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold text-gray-900">"Signing Keys"</h1>
                <button
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg"
                    on:click=move |_| acknowledge("New key pair generated and escrowed (demo)")
                >
                    "Generate Key"
                </button>
            </div>
            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Key"</th>
                            <th class="px-6 py-3">"Algorithm"</th>
                            <th class="px-6 py-3">"Created"</th>
                            <th class="px-6 py-3">"Expiry"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {keys.into_iter().map(|key| view! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4">
                                    <div class="text-sm font-medium text-gray-900">{key.name}</div>
                                    <div class="text-xs text-gray-400">{key.id}</div>
                                </td>
                                <td class="px-6 py-4 text-sm text-gray-600">{key.algorithm}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{key.created.to_string()}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{key.expiry.to_string()}</td>
                                <td class="px-6 py-4">
                                    <span class=format!(
                                        "px-2 py-1 text-xs font-medium rounded-full {}",
                                        if key.active { "bg-emerald-100 text-emerald-700" } else { "bg-gray-100 text-gray-500" }
                                    )>
                                        {if key.active { "active" } else { "retired" }}
                                    </span>
                                </td>
                                <td class="px-6 py-4 text-right">
                                    <button
                                        class="text-sm text-red-600 hover:underline"
                                        on:click=move |_| acknowledge("Key rotation scheduled (demo)")
                                    >
                                        "Rotate"
                                    </button>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn DisputeQueue() -> impl IntoView {
    let disputes = seed::registrar_disputes();
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Dispute Queue"</h1>
            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Ticket"</th>
                            <th class="px-6 py-3">"Certificate"</th>
                            <th class="px-6 py-3">"Student"</th>
                            <th class="px-6 py-3">"Type"</th>
                            <th class="px-6 py-3">"Priority"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {disputes.into_iter().map(|d| {
                            let priority_classes = match d.priority.as_str() {
                                "High" => "bg-red-100 text-red-700",
                                "Medium" => "bg-amber-100 text-amber-700",
                                _ => "bg-gray-100 text-gray-600",
                            };
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-4 text-sm font-medium text-gray-900">{d.id}</td>
                                    <td class="px-6 py-4 text-sm text-gray-600">{d.cert_id}</td>
                                    <td class="px-6 py-4 text-sm text-gray-700">{d.student}</td>
                                    <td class="px-6 py-4 text-sm text-gray-600">{d.kind}</td>
                                    <td class="px-6 py-4">
                                        <span class=format!("px-2 py-1 text-xs font-bold rounded-full {priority_classes}")>
                                            {d.priority}
                                        </span>
                                    </td>
                                    <td class="px-6 py-4 text-sm text-gray-600">{d.status}</td>
                                    <td class="px-6 py-4 text-right">
                                        <button
                                            class="text-sm text-blue-600 hover:underline"
                                            on:click=move |_| acknowledge("Correction issued to student record (demo)")
                                        >
                                            "Resolve"
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
fn Reputation() -> impl IntoView {
    let history = seed::trust_score_history();
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Reputation"</h1>
            <div class="bg-white rounded-lg shadow p-6 space-y-3">
                <h2 class="text-xl font-semibold">"Institution Trust Score Over Time"</h2>
                {history.into_iter().map(|point| view! {
                    <ScoreBar label=point.label value=point.count max=100/>
                }).collect_view()}
                <p class="text-xs text-gray-400">
                    "Scores reflect dispute resolution speed, issuance hygiene and forensic flag rates."
                </p>
            </div>
        </div>
    }
}
