//! Main application component

use leptos::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-100">
                <Nav/>
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=RolePicker/>
                        <Route path="/student" view=StudentDashboard/>
                        <Route path="/institution" view=InstitutionDashboard/>
                        <Route path="/verifier" view=VerifierDashboard/>
                        <Route path="/admin" view=AdminDashboard/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Landing route of the app shell: pick a role dashboard.
#[component]
fn RolePicker() -> impl IntoView {
    let roles = [
        ("/student", "Student Portal", "Submit and verify your certificates"),
        ("/verifier", "Verifier Dashboard", "Verification tools and fraud intelligence"),
        ("/institution", "Registrar Portal", "Templates, keys and issuance"),
        ("/admin", "Admin Console", "Oversight, cases and governance"),
    ];

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"Choose Your Role"</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {roles.into_iter().map(|(href, title, description)| view! {
                    <a href=href class="bg-white rounded-lg shadow p-6 hover:shadow-lg transition">
                        <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
                        <p class="text-sm text-gray-500">{description}</p>
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
