//! Admin console: oversight KPIs, case investigation, blacklist,
//! governance and access control.

use leptos::*;
use vs_core::model::CaseFile;
use vs_core::{seed, ReviewAction};

use crate::components::{acknowledge, ScoreBar, SectionButton, StatCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Overview,
    Cases,
    Blacklist,
    Governance,
    Access,
}

const SECTIONS: [(Section, &str); 5] = [
    (Section::Overview, "Overview"),
    (Section::Cases, "Case Console"),
    (Section::Blacklist, "Blacklist"),
    (Section::Governance, "Governance Rules"),
    (Section::Access, "Users & Audit"),
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (section, set_section) = create_signal(Section::Overview);

    view! {
        <div class="flex gap-6">
            <aside class="w-64 bg-white rounded-lg shadow p-4 space-y-1 self-start">
                <h2 class="px-3 py-2 text-lg font-bold text-gray-900">"Admin Console"</h2>
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
                    Section::Cases => view! { <CaseConsole/> }.into_view(),
                    Section::Blacklist => view! { <BlacklistView/> }.into_view(),
                    Section::Governance => view! { <GovernanceView/> }.into_view(),
                    Section::Access => view! { <AccessView/> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let kpis = seed::admin_kpis();
    let districts = seed::district_fraud();
    let max = districts.iter().map(|d| d.count).max().unwrap_or(1);
    let verifications = kpis.total_verifications.clone();
    let investigations = kpis.open_investigations;
    let suspensions = kpis.auto_suspensions;
    let trust_avg = kpis.trust_score_avg;

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Overview"</h1>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Total Verifications" value=move || verifications.clone() icon="\u{1F4CA}"/>
                <StatCard title="Open Investigations" value=move || investigations.to_string() icon="\u{1F50E}"/>
                <StatCard title="Auto-Suspensions" value=move || suspensions.to_string() icon="\u{26D4}"/>
                <StatCard title="Avg Trust Score" value=move || format!("{}%", trust_avg) icon="\u{1F6E1}"/>
            </div>

            <div class="bg-white rounded-lg shadow p-6 space-y-3">
                <div class="flex justify-between items-center">
                    <h2 class="text-xl font-semibold">"Fraud Flags by District"</h2>
                    <span class="text-xs text-gray-400">{format!("{} flags total", kpis.total_flags)}</span>
                </div>
                {districts.into_iter().map(|d| view! {
                    <ScoreBar label=d.label value=d.count max=max/>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CaseConsole() -> impl IntoView {
    let queue = store_value(seed::case_queue());
    let (selected, set_selected) = create_signal(None::<CaseFile>);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Case & Investigation Console"</h1>
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2 bg-white rounded-lg shadow overflow-hidden">
                    <table class="w-full text-left">
                        <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                            <tr>
                                <th class="px-6 py-3">"Case"</th>
                                <th class="px-6 py-3">"Certificate"</th>
                                <th class="px-6 py-3">"Score"</th>
                                <th class="px-6 py-3">"District"</th>
                                <th class="px-6 py-3">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {queue.with_value(|q| q.clone()).into_iter().map(|case| {
                                let row = case.clone();
                                view! {
                                    <tr
                                        class="hover:bg-blue-50 cursor-pointer"
                                        on:click=move |_| set_selected.set(Some(row.clone()))
                                    >
                                        <td class="px-6 py-4 text-sm font-medium text-gray-900">{case.id.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-600">{case.cert_id.clone()}</td>
                                        <td class="px-6 py-4 text-sm font-bold text-gray-700">{format!("{}%", case.score)}</td>
                                        <td class="px-6 py-4 text-sm text-gray-600">{case.district.clone()}</td>
                                        <td class="px-6 py-4 text-sm text-gray-600">{case.status.clone()}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="bg-white rounded-lg shadow p-6">
                    {move || match selected.get() {
                        None => view! {
                            <p class="text-sm text-gray-500">"Select a case to see its details and available actions."</p>
                        }.into_view(),
                        Some(case) => view! { <CasePanel case=case/> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Detail panel for a selected case. Which actions render is gated by the
/// trust-score routing, same as the verifier's per-row actions.
#[component]
fn CasePanel(case: CaseFile) -> impl IntoView {
    let actions: &[(&str, &str)] = match vs_core::route(case.score) {
        ReviewAction::AutoApprove => &[("Close as Cleared", "bg-emerald-600 hover:bg-emerald-700")],
        ReviewAction::ManualReview => &[
            ("Assign Reviewer", "bg-amber-600 hover:bg-amber-700"),
            ("Request Documents", "bg-gray-600 hover:bg-gray-700"),
        ],
        ReviewAction::Escalate => &[
            ("Suspend Certificate", "bg-red-600 hover:bg-red-700"),
            ("Notify Institution", "bg-gray-600 hover:bg-gray-700"),
            ("Refer to Police Cell", "bg-gray-800 hover:bg-gray-900"),
        ],
    };

    view! {
        <div class="space-y-4">
            <div>
                <h2 class="text-xl font-semibold">{case.id.clone()}</h2>
                <p class="text-sm text-gray-500">
                    {case.cert_id.clone()} " \u{b7} " {case.district.clone()}
                </p>
            </div>
            <dl class="text-sm space-y-1">
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Trust score"</dt>
                    <dd class="font-bold">{format!("{}%", case.score)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Assignee"</dt>
                    <dd>{case.assignee.clone()}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-gray-500">"Flagged on"</dt>
                    <dd>{case.flagged_on.to_string()}</dd>
                </div>
            </dl>
            <div class="space-y-2">
                {actions.iter().map(|(label, classes)| {
                    let label = *label;
                    view! {
                        <button
                            class=format!("w-full text-white px-4 py-2 rounded-lg text-sm {classes}")
                            on:click=move |_| acknowledge(&format!("{label}: action recorded (demo)"))
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BlacklistView() -> impl IntoView {
    let clusters = seed::pattern_clusters();
    let entries = seed::blacklist();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Blacklist Management"</h1>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {clusters.into_iter().map(|c| {
                    let severity_classes = match c.severity.as_str() {
                        "Critical" => "bg-red-100 text-red-700",
                        "High" => "bg-amber-100 text-amber-700",
                        _ => "bg-gray-100 text-gray-600",
                    };
                    view! {
                        <div class="bg-white rounded-lg shadow p-6">
                            <div class="flex justify-between items-center mb-2">
                                <h3 class="text-sm font-semibold text-gray-900">{c.kind}</h3>
                                <span class=format!("px-2 py-1 text-xs font-bold rounded-full {severity_classes}")>
                                    {c.severity}
                                </span>
                            </div>
                            <div class="text-2xl font-bold text-gray-900">{c.count}</div>
                            <p class="text-xs text-gray-500 mt-1">{c.rationale}</p>
                            <p class="text-xs text-gray-400 mt-2">{c.id} " \u{b7} " {c.district}</p>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Entity"</th>
                            <th class="px-6 py-3">"District"</th>
                            <th class="px-6 py-3">"Flagged Certs"</th>
                            <th class="px-6 py-3">"First Seen"</th>
                            <th class="px-6 py-3">"Tag"</th>
                            <th class="px-6 py-3"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {entries.into_iter().map(|entry| view! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4">
                                    <div class="text-sm font-medium text-gray-900">{entry.name}</div>
                                    <div class="text-xs text-gray-400">{entry.notes}</div>
                                </td>
                                <td class="px-6 py-4 text-sm text-gray-600">{entry.district}</td>
                                <td class="px-6 py-4 text-sm font-bold text-gray-700">{entry.flagged}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{entry.first_seen.to_string()}</td>
                                <td class="px-6 py-4">
                                    <span class="px-2 py-1 text-xs font-medium rounded-full bg-red-100 text-red-700">
                                        {entry.tag}
                                    </span>
                                </td>
                                <td class="px-6 py-4 text-right">
                                    <button
                                        class="text-sm text-blue-600 hover:underline"
                                        on:click=move |_| acknowledge("Delisting review opened (demo)")
                                    >
                                        "Review"
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
fn GovernanceView() -> impl IntoView {
    let rules = seed::governance_rules();
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Governance Rules"</h1>
            <div class="bg-white rounded-lg shadow divide-y divide-gray-100">
                {rules.into_iter().map(|rule| view! {
                    <div class="flex items-center justify-between p-4">
                        <div>
                            <div class="text-sm font-medium text-gray-900">{rule.rule}</div>
                            <div class="text-xs text-gray-500">{rule.description}</div>
                            <div class="text-xs text-gray-400 mt-1">"Enforcement: " {rule.enforcement}</div>
                        </div>
                        <button
                            class=format!(
                                "px-3 py-1 text-xs font-bold rounded-full {}",
                                if rule.enabled { "bg-emerald-100 text-emerald-700" } else { "bg-gray-100 text-gray-500" }
                            )
                            on:click=move |_| acknowledge("Rule change submitted for dual sign-off (demo)")
                        >
                            {if rule.enabled { "Enabled" } else { "Disabled" }}
                        </button>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn AccessView() -> impl IntoView {
    let users = seed::rbac_users();
    let audit = seed::audit_log();

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Users & Audit"</h1>

            <div class="bg-white rounded-lg shadow overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"User"</th>
                            <th class="px-6 py-3">"Role"</th>
                            <th class="px-6 py-3">"Department"</th>
                            <th class="px-6 py-3">"Status"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {users.into_iter().map(|user| view! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{user.name}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{user.role}</td>
                                <td class="px-6 py-4 text-sm text-gray-600">{user.department}</td>
                                <td class="px-6 py-4">
                                    <span class=format!(
                                        "px-2 py-1 text-xs font-medium rounded-full {}",
                                        if user.active { "bg-emerald-100 text-emerald-700" } else { "bg-gray-100 text-gray-500" }
                                    )>
                                        {if user.active { "active" } else { "suspended" }}
                                    </span>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="bg-gray-900 rounded-lg shadow p-6">
                <h2 class="text-sm font-semibold text-gray-300 uppercase mb-3">"Audit Log (immutable)"</h2>
                <div class="font-mono text-xs text-green-400 space-y-1">
                    {audit.into_iter().map(|line| view! {
                        <div>{format!("[{}] {}: {}", line.at, line.actor, line.action)}</div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
