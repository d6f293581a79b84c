//! Certificate upload intake: file picker or QR scan, both simulated.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use vs_core::UploadedFile;

/// Intake channel selected by the user. Both feed the same pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadMode {
    File,
    Qr,
}

fn picked_file(ev: &leptos::ev::Event) -> Option<UploadedFile> {
    let input: HtmlInputElement = ev.target()?.dyn_into().ok()?;
    let file = input.files()?.get(0)?;
    // Only the display name enters the pipeline; contents are never read.
    Some(UploadedFile::new(file.name()))
}

/// Upload intake with a file/QR toggle. `on_submit` fires once per intake
/// with the display name of whatever was provided.
#[component]
pub fn UploadPanel(on_submit: Callback<UploadedFile>) -> impl IntoView {
    let (mode, set_mode) = create_signal(UploadMode::File);

    let tab = move |label: &'static str, target: UploadMode| {
        view! {
            <button
                class=move || format!(
                    "flex-1 px-4 py-2 text-sm font-medium rounded-md {}",
                    if mode.get() == target { "bg-white shadow text-blue-700" } else { "text-gray-600" }
                )
                on:click=move |_| set_mode.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex gap-1 p-1 bg-gray-100 rounded-lg">
                {tab("Upload File", UploadMode::File)}
                {tab("Scan QR Code", UploadMode::Qr)}
            </div>

            <Show
                when=move || mode.get() == UploadMode::File
                fallback=move || view! {
                    <div class="border-2 border-dashed border-gray-300 rounded-xl p-10 text-center">
                        <div class="text-4xl mb-2">"\u{1F4F7}"</div>
                        <p class="text-sm text-gray-600 mb-4">"Point your camera at the certificate QR code"</p>
                        <button
                            class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-lg"
                            on:click=move |_| on_submit.call(UploadedFile::new("qr-scan.pdf"))
                        >
                            "Simulate Scan"
                        </button>
                    </div>
                }
            >
                <label class="block border-2 border-dashed border-gray-300 hover:border-blue-400 rounded-xl p-10 text-center cursor-pointer">
                    <div class="text-4xl mb-2">"\u{1F4C4}"</div>
                    <p class="text-sm text-gray-600">"Drop your certificate here or click to browse"</p>
                    <p class="text-xs text-gray-400 mt-1">"PDF, JPG or PNG"</p>
                    <input
                        type="file"
                        accept="application/pdf,image/*"
                        class="hidden"
                        on:change=move |ev| {
                            if let Some(file) = picked_file(&ev) {
                                on_submit.call(file);
                            }
                        }
                    />
                </label>
            </Show>
        </div>
    }
}
