use leptos::prelude::*;

use super::column::KanbanColumn;
use crate::features::kanban::hooks::use_board;

/// Top-level board controller. Owns the board hook and lays the columns out
/// left to right in display order.
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let board = use_board();

    view! {
        <div class="kanban-board">
            <div class="column-list">
                {move || {
                    board
                        .columns
                        .get()
                        .into_iter()
                        .map(|column| view! { <KanbanColumn column=column board=board /> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button class="add-column-btn" on:click=move |_| board.add_column.run(())>
                "+ Add Column"
            </button>
        </div>
    }
}
