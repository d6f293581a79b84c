//! Marketing footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-12">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"\u{1F6E1}"</span>
                            <span class="text-xl font-bold text-white">"VeriSure"</span>
                        </div>
                        <p class="text-sm">
                            "Certificate authenticity verification for students, employers and institutions."
                        </p>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-3">"Platform"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="/student" class="hover:text-white">"Student Portal"</a></li>
                            <li><a href="/verifier" class="hover:text-white">"Verifier Dashboard"</a></li>
                            <li><a href="/institution" class="hover:text-white">"Registrar Portal"</a></li>
                            <li><a href="/admin" class="hover:text-white">"Admin Console"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-3">"Resources"</h3>
                        <ul class="space-y-2 text-sm">
                            <li><a href="#demo" class="hover:text-white">"Live Demo"</a></li>
                            <li><a href="#features" class="hover:text-white">"How Verification Works"</a></li>
                            <li><a href="#impact" class="hover:text-white">"Pilot Impact"</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-white font-semibold mb-3">"Contact"</h3>
                        <ul class="space-y-2 text-sm">
                            <li>"Department of Higher Education"</li>
                            <li>"Ranchi, Jharkhand"</li>
                            <li>"support@verisure.example"</li>
                        </ul>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-10 pt-6 text-xs text-center">
                    "Pilot program demonstration. All data shown is simulated."
                </div>
            </div>
        </footer>
    }
}
