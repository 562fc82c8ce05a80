use leptos::prelude::*;

use crate::features::kanban::board_state::DropTarget;
use crate::features::kanban::hooks::BoardHook;
use crate::models::Task;

/// A single draggable card. Click to edit in place; the delete button only
/// shows while the pointer is over the card and the card is not being
/// edited. Dragging is disabled while the textarea is open.
#[component]
pub fn TaskCard(task: Task, board: BoardHook) -> impl IntoView {
    let (edit_mode, set_edit_mode) = signal(false);
    let (mouse_over, set_mouse_over) = signal(false);

    let content = task.content.clone();
    let created = task.created_at.format("created %Y-%m-%d %H:%M").to_string();
    let task_for_drag = task.clone();
    let drag_task_id = task.id.clone();
    let over_task_id = task.id.clone();
    let drop_task_id = task.id.clone();
    let rename_task_id = task.id.clone();
    let delete_task_id = task.id.clone();

    let is_dragging = move || {
        board
            .drag
            .with(|d| d.active_id() == Some(drag_task_id.as_str()))
    };

    let commit_content = move |value: String| {
        board.rename_task.run((rename_task_id.clone(), value));
        set_edit_mode.set(false);
    };

    view! {
        <div
            class="task-card"
            class:dragging=is_dragging
            title=created
            draggable=move || if edit_mode.get() { "false" } else { "true" }
            on:click=move |_| {
                // clicks inside the open textarea must not rebuild it
                if !edit_mode.get() {
                    set_edit_mode.set(true);
                }
            }
            on:mouseenter=move |_| set_mouse_over.set(true)
            on:mouseleave=move |_| set_mouse_over.set(false)
            on:dragstart=move |ev| {
                ev.stop_propagation();
                if let Some(data) = ev.data_transfer() {
                    let _ = data.set_data("text/plain", &task_for_drag.id);
                    data.set_effect_allowed("move");
                }
                board.drag_start_task.run(task_for_drag.clone());
            }
            on:dragover=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                board.drag_over.run(DropTarget::Task(over_task_id.clone()));
            }
            on:drop=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                board.drop_on.run(DropTarget::Task(drop_task_id.clone()));
            }
            on:dragend=move |_| board.drag_cancel.run(())
        >
            {move || {
                if edit_mode.get() {
                    let commit_on_blur = commit_content.clone();
                    let commit_on_keydown = commit_content.clone();
                    view! {
                        <textarea
                            class="task-content-input"
                            autofocus=true
                            placeholder="Type your task here..."
                            on:blur=move |ev| commit_on_blur(event_target_value(&ev))
                            on:keydown=move |ev| {
                                // plain Enter keeps inserting newlines
                                if ev.key() == "Enter" && ev.shift_key() {
                                    commit_on_keydown(event_target_value(&ev));
                                }
                            }
                        >
                            {content.clone()}
                        </textarea>
                    }
                        .into_any()
                } else {
                    view! { <p class="task-content">{content.clone()}</p> }.into_any()
                }
            }}
            {move || {
                if mouse_over.get() && !edit_mode.get() {
                    let delete_id = delete_task_id.clone();
                    view! {
                        <button
                            class="task-delete-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                board.delete_task.run(delete_id.clone());
                            }
                        >
                            "🗑"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {}.into_any()
                }
            }}
        </div>
    }
}
