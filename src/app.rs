use leptos::prelude::*;

use crate::features::kanban::components::KanbanBoard;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <KanbanBoard />
        </main>
    }
}
