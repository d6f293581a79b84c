//! Card components for the landing page

use leptos::*;

#[component]
pub fn RoleCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <a href=href class="bg-white rounded-xl shadow-lg p-6 text-center hover:shadow-xl transition block">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600 text-sm">{description}</p>
        </a>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-12 h-12 bg-blue-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    items: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-xl font-semibold mb-3">{title}</h3>
            <ul class="space-y-2 text-gray-400 text-sm">
                {items.into_iter().map(|item| view! {
                    <li class="flex items-center">
                        <span class="text-cyan-400 mr-2">"\u{2022}"</span>
                        {item}
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn ImpactStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-blue-600">{value}</div>
            <div class="text-gray-600 mt-1">{label}</div>
        </div>
    }
}
