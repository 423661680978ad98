//! Main App component with routing

use crate::components::Sidebar;
use crate::pages::{AssignTeacher, TeacherProfiles};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <Routes fallback=|| "Page not found">
                        <Route path=path!("/") view=AssignTeacher />
                        <Route path=path!("/teachers") view=TeacherProfiles />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
