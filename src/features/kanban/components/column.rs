use leptos::prelude::*;

use super::task_card::TaskCard;
use crate::features::kanban::board_state::DropTarget;
use crate::features::kanban::hooks::BoardHook;
use crate::models::Column;

/// One column: a draggable header with inline title editing, the tasks
/// assigned to the column in display order, and an add-task footer.
///
/// The column body accepts drops so a task can be moved into a column that
/// has no cards yet. Task cards sitting on top stop propagation, so the
/// innermost target under the pointer wins.
#[component]
pub fn KanbanColumn(column: Column, board: BoardHook) -> impl IntoView {
    let (edit_mode, set_edit_mode) = signal(false);

    let title = column.title.clone();
    let column_for_drag = column.clone();
    let tasks_column_id = column.id.clone();
    let drag_column_id = column.id.clone();
    let over_column_id = column.id.clone();
    let drop_column_id = column.id.clone();
    let rename_column_id = column.id.clone();
    let delete_column_id = column.id.clone();
    let add_task_column_id = column.id.clone();

    // Tasks carrying this column's id, in global-sequence order
    let column_tasks = Memo::new(move |_| {
        board.tasks.with(|tasks| {
            tasks
                .iter()
                .filter(|t| t.column_id == tasks_column_id)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let is_dragging = move || {
        board
            .drag
            .with(|d| d.active_id() == Some(drag_column_id.as_str()))
    };

    let commit_title = move |value: String| {
        board.rename_column.run((rename_column_id.clone(), value));
        set_edit_mode.set(false);
    };

    view! {
        <div
            class="kanban-column"
            class:dragging=is_dragging
            on:dragover=move |ev| {
                ev.prevent_default();
                board.drag_over.run(DropTarget::Column(over_column_id.clone()));
            }
            on:drop=move |ev| {
                ev.prevent_default();
                board.drop_on.run(DropTarget::Column(drop_column_id.clone()));
            }
        >
            <div
                class="column-header"
                draggable=move || if edit_mode.get() { "false" } else { "true" }
                on:dragstart=move |ev| {
                    if let Some(data) = ev.data_transfer() {
                        let _ = data.set_data("text/plain", &column_for_drag.id);
                        data.set_effect_allowed("move");
                    }
                    board.drag_start_column.run(column_for_drag.clone());
                }
                on:dragend=move |_| board.drag_cancel.run(())
                on:click=move |_| {
                    // clicks inside the open input must not rebuild it
                    if !edit_mode.get() {
                        set_edit_mode.set(true);
                    }
                }
            >
                <div class="column-title">
                    <span class="task-count">{move || column_tasks.with(|t| t.len())}</span>
                    {move || {
                        if edit_mode.get() {
                            let commit_on_blur = commit_title.clone();
                            let commit_on_enter = commit_title.clone();
                            view! {
                                <input
                                    class="column-title-input"
                                    value=title.clone()
                                    autofocus=true
                                    on:blur=move |ev| commit_on_blur(event_target_value(&ev))
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            commit_on_enter(event_target_value(&ev));
                                        }
                                    }
                                />
                            }
                                .into_any()
                        } else {
                            view! { <span class="column-title-text">{title.clone()}</span> }
                                .into_any()
                        }
                    }}
                </div>
                <button
                    class="column-delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        board.delete_column.run(delete_column_id.clone());
                    }
                >
                    "🗑"
                </button>
            </div>
            <div class="column-content">
                {move || {
                    column_tasks
                        .get()
                        .into_iter()
                        .map(|task| view! { <TaskCard task=task board=board /> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button
                class="add-task-btn"
                on:click=move |_| board.add_task.run(add_task_column_id.clone())
            >
                "+ Add Task"
            </button>
        </div>
    }
}
