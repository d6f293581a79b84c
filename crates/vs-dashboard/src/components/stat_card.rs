//! Stat card component

use leptos::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: impl Fn() -> String + 'static,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500">{title}</p>
                    <p class="text-2xl font-bold text-gray-900">{value}</p>
                </div>
                <div class="w-12 h-12 bg-blue-100 rounded-full flex items-center justify-center">
                    <span class="text-blue-600">{icon}</span>
                </div>
            </div>
        </div>
    }
}
