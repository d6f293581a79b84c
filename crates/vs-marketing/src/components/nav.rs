//! Marketing navigation component

use leptos::*;

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"\u{1F6E1}"</span>
                            <span class="text-xl font-bold text-gray-900">"VeriSure"</span>
                            <span class="ml-3 px-2 py-1 text-xs font-medium rounded-full bg-blue-100 text-blue-800">
                                "Govt of Jharkhand Pilot"
                            </span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        <a href="#demo" class="text-gray-600 hover:text-gray-900 transition">"Live Demo"</a>
                        <a href="#roles" class="text-gray-600 hover:text-gray-900 transition">"Who It's For"</a>
                        <a href="#features" class="text-gray-600 hover:text-gray-900 transition">"Platform"</a>
                        <div class="flex items-center space-x-4 ml-4">
                            // Language switch and sign-in are placeholders in the pilot.
                            <span class="text-gray-400">"EN | \u{939}\u{93f}"</span>
                            <a href="/student" class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition">
                                "Sign In"
                            </a>
                        </div>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href="#demo" class="block text-gray-600 hover:text-gray-900">"Live Demo"</a>
                        <a href="#roles" class="block text-gray-600 hover:text-gray-900">"Who It's For"</a>
                        <a href="#features" class="block text-gray-600 hover:text-gray-900">"Platform"</a>
                        <div class="pt-4 border-t border-gray-200">
                            <a href="/student" class="block w-full text-center px-4 py-2 bg-blue-600 text-white font-medium rounded-lg">
                                "Sign In"
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
