//! Home page

use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use vs_core::{seed, ExtractionEvent, ExtractionRun, FieldExtraction, FieldStatus, UploadedFile};

use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-blue-900 via-indigo-900 to-blue-800 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Every Certificate, "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-400">
                                "Verified"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "VeriSure checks academic certificates against the national registry, "
                            "institution databases and a tamper-evident ledger in seconds."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/student" class="px-8 py-4 bg-cyan-500 hover:bg-cyan-400 text-white font-semibold rounded-lg transition">
                                "Verify Now"
                            </a>
                            <a href="#demo" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "Try Demo"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Live Demo
            <section id="demo" class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-10">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "See Verification in Action"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Watch the pipeline read a sample certificate field by field and score each one."
                        </p>
                    </div>
                    <div class="max-w-xl mx-auto">
                        <LiveDemo/>
                    </div>
                </div>
            </section>

            // Role Cards
            <section id="roles" class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "One Platform, Four Roles"
                        </h2>
                        <p class="text-lg text-gray-600">
                            "Students, employers, institutions and the oversight authority all work from the same verified record."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        <RoleCard
                            icon="\u{1F393}"
                            title="Students"
                            description="Upload certificates, build a verified academic wallet and share tamper-proof links."
                            href="/student"
                        />
                        <RoleCard
                            icon="\u{1F4BC}"
                            title="Employers"
                            description="Verify candidates in seconds, one at a time or in bulk, with forensic detail on demand."
                            href="/verifier"
                        />
                        <RoleCard
                            icon="\u{1F3DB}"
                            title="Institutions"
                            description="Register templates, sign issuance batches and resolve disputes from one portal."
                            href="/institution"
                        />
                        <RoleCard
                            icon="\u{2696}"
                            title="Government"
                            description="District-level fraud intelligence, case management and policy enforcement."
                            href="/admin"
                        />
                    </div>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
                            "How It Works"
                        </h2>
                    </div>
                    <div class="grid md:grid-cols-4 gap-8">
                        <StepCard
                            number="1"
                            title="Upload"
                            description="Submit a certificate as PDF, photo or QR code."
                        />
                        <StepCard
                            number="2"
                            title="Extract"
                            description="Fields are read out and scored for confidence one by one."
                        />
                        <StepCard
                            number="3"
                            title="Cross-Check"
                            description="Registry, institution database, ledger and forensics vote independently."
                        />
                        <StepCard
                            number="4"
                            title="Decide"
                            description="A trust score routes the result: approve, review or escalate."
                        />
                    </div>
                </div>
            </section>

            // Platform Features
            <section id="features" class="py-20 bg-gray-900 text-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">
                            "Built for a National Rollout"
                        </h2>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <FeatureCard
                            icon="\u{1F50E}"
                            title="Field-Level OCR"
                            items=vec!["Per-field confidence", "Template matching", "Handwriting tolerance", "Regional scripts"]
                        />
                        <FeatureCard
                            icon="\u{1F5C4}"
                            title="Registry Consensus"
                            items=vec!["National registry", "Institution databases", "Ledger anchoring", "Forensic signals"]
                        />
                        <FeatureCard
                            icon="\u{1F6A9}"
                            title="Fraud Intelligence"
                            items=vec!["Pattern clusters", "District heat maps", "Blacklist propagation", "Case workflows"]
                        />
                        <FeatureCard
                            icon="\u{1F511}"
                            title="Signed Issuance"
                            items=vec!["Institution key pairs", "Template governance", "Bulk batches", "Key rotation"]
                        />
                        <FeatureCard
                            icon="\u{2696}"
                            title="Due Process"
                            items=vec!["Student disputes", "Registrar queues", "Dual sign-off", "Immutable audit log"]
                        />
                        <FeatureCard
                            icon="\u{1F310}"
                            title="Open Integration"
                            items=vec!["Embeddable widget", "Careers portal plugins", "Verification links", "Batch APIs"]
                        />
                    </div>
                </div>
            </section>

            // Impact Strip
            <section id="impact" class="py-16 bg-white border-t border-gray-100">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        <ImpactStat value="2.4M+" label="Certificates verified"/>
                        <ImpactStat value="1,800+" label="Forgeries caught"/>
                        <ImpactStat value="320" label="Institutions onboard"/>
                        <ImpactStat value="24" label="Districts covered"/>
                    </div>
                </div>
            </section>
        </div>
    }
}

/// The inline demo verification. Runs the four-field sample with preset
/// confidences, one field every 1.2 s, and shows the completion panel once
/// progress reaches 100.
#[component]
fn LiveDemo() -> impl IntoView {
    let run = store_value(None::<ExtractionRun>);
    let interval = store_value(None::<IntervalHandle>);
    let (fields, set_fields) = create_signal(Vec::<FieldExtraction>::new());
    let (progress, set_progress) = create_signal(0u8);
    let (done, set_done) = create_signal(false);

    let clear_interval = move || {
        interval.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        })
    };
    on_cleanup(clear_interval);

    let start_demo = move |_| {
        clear_interval();
        run.set_value(Some(ExtractionRun::start(
            UploadedFile::new("sample-certificate.pdf"),
            seed::landing_template(),
        )));
        set_fields.set(Vec::new());
        set_progress.set(0);
        set_done.set(false);

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
                // The demo only tells the extraction story; the record a
                // real run would produce is not shown here.
                Some(ExtractionEvent::Complete(_)) | None => {
                    set_done.set(true);
                    clear_interval();
                }
            }
        };
        match set_interval_with_handle(tick, Duration::from_millis(1200)) {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => tracing::warn!(?err, "demo interval not scheduled"),
        }
    };

    let badge_classes = |status: FieldStatus| match status {
        FieldStatus::Ok => "bg-emerald-100 text-emerald-700",
        FieldStatus::Warn => "bg-amber-100 text-amber-700",
        FieldStatus::Fail => "bg-red-100 text-red-700",
    };

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <div>
                    <div class="text-sm font-medium text-gray-900">"sample-certificate.pdf"</div>
                    <div class="text-xs text-gray-400">"B.Tech degree, Mock University"</div>
                </div>
                <button
                    class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-lg text-sm"
                    on:click=start_demo
                >
                    "Run Demo"
                </button>
            </div>

            <div class="h-2 rounded-full bg-gray-200 overflow-hidden">
                <div
                    class="h-full bg-blue-600 rounded-full transition-all"
                    style=move || format!("width: {}%", progress.get())
                ></div>
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
                            badge_classes(field.status),
                        )>
                            {format!("{}%", field.confidence)}
                        </span>
                    </div>
                }).collect_view()}
            </div>

            <Show when=move || done.get()>
                <div class="p-4 bg-emerald-50 border border-emerald-200 rounded-lg text-center">
                    <div class="text-sm text-emerald-700 font-medium">"Verification Complete"</div>
                    <div class="text-2xl font-bold text-emerald-700 mt-1">
                        "Overall Verification Score: 87%"
                    </div>
                </div>
            </Show>
        </div>
    }
}
