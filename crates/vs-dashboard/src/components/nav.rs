//! Navigation component

use leptos::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-bold text-gray-900">
                            "VeriSure"
                        </a>
                        <div class="hidden md:flex ml-10 space-x-4">
                            <a href="/student" class="text-gray-600 hover:text-gray-900 px-3 py-2">"Student"</a>
                            <a href="/verifier" class="text-gray-600 hover:text-gray-900 px-3 py-2">"Verifier"</a>
                            <a href="/institution" class="text-gray-600 hover:text-gray-900 px-3 py-2">"Institution"</a>
                            <a href="/admin" class="text-gray-600 hover:text-gray-900 px-3 py-2">"Admin"</a>
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="px-2 py-1 text-xs font-medium rounded-full bg-blue-100 text-blue-800">"Govt Pilot"</span>
                        <span class="text-gray-600">"Authenticity Validator"</span>
                    </div>
                </div>
            </div>
        </nav>
    }
}
