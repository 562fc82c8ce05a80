use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::features::kanban::board_state::{BoardState, DragState, DropTarget};
use crate::models::{Column, Task};

/// Reactive handle to the board, created once by the top-level board
/// component and passed down into child views.
///
/// The `Memo` fields only notify when the derived value actually changed,
/// so the continuous dragover stream does not re-render columns it did not
/// touch.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub columns: Memo<Vec<Column>>,
    pub tasks: Memo<Vec<Task>>,
    pub drag: Memo<DragState>,
    pub add_column: Callback<()>,
    pub rename_column: Callback<(String, String)>,
    pub delete_column: Callback<String>,
    pub add_task: Callback<String>,
    pub rename_task: Callback<(String, String)>,
    pub delete_task: Callback<String>,
    pub drag_start_column: Callback<Column>,
    pub drag_start_task: Callback<Task>,
    pub drag_over: Callback<DropTarget>,
    pub drop_on: Callback<DropTarget>,
    pub drag_cancel: Callback<()>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(BoardState::new());

    let columns = Memo::new(move |_| board.with(|b| b.columns().to_vec()));
    let tasks = Memo::new(move |_| board.with(|b| b.tasks().to_vec()));
    let drag = Memo::new(move |_| board.with(|b| b.drag().clone()));

    // The browser refires dragover on a held-still pointer. Reconciliation
    // assumes one event per (active, over) change, so consecutive duplicates
    // are dropped here before they reach the state machine.
    let last_over: StoredValue<Option<DropTarget>> = StoredValue::new(None);

    let add_column = Callback::new(move |()| {
        board.update(|b| {
            b.add_column();
        });
    });

    let rename_column = Callback::new(move |(id, title): (String, String)| {
        board.update(|b| {
            if !b.rename_column(&id, title).applied() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "rename_column: no column with id {}",
                    id
                )));
            }
        });
    });

    let delete_column = Callback::new(move |id: String| {
        board.update(|b| {
            if !b.delete_column(&id).applied() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "delete_column: no column with id {}",
                    id
                )));
            }
        });
    });

    let add_task = Callback::new(move |column_id: String| {
        board.update(|b| {
            if b.add_task(&column_id).is_none() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "add_task: no column with id {}",
                    column_id
                )));
            }
        });
    });

    let rename_task = Callback::new(move |(id, content): (String, String)| {
        board.update(|b| {
            if !b.rename_task(&id, content).applied() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "rename_task: no task with id {}",
                    id
                )));
            }
        });
    });

    let delete_task = Callback::new(move |id: String| {
        board.update(|b| {
            if !b.delete_task(&id).applied() {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "delete_task: no task with id {}",
                    id
                )));
            }
        });
    });

    let drag_start_column = Callback::new(move |column: Column| {
        last_over.set_value(None);
        let payload = serde_json::to_string(&column).unwrap_or_default();
        web_sys::console::log_1(&JsValue::from_str(&format!("drag start: column {}", payload)));
        board.update(|b| b.drag_start_column(column));
    });

    let drag_start_task = Callback::new(move |task: Task| {
        last_over.set_value(None);
        let payload = serde_json::to_string(&task).unwrap_or_default();
        web_sys::console::log_1(&JsValue::from_str(&format!("drag start: task {}", payload)));
        board.update(|b| b.drag_start_task(task));
    });

    let drag_over = Callback::new(move |target: DropTarget| {
        if last_over.with_value(|last| last.as_ref() == Some(&target)) {
            return;
        }
        last_over.set_value(Some(target.clone()));
        board.update(|b| {
            let _ = b.drag_over(&target);
        });
    });

    let drop_on = Callback::new(move |target: DropTarget| {
        last_over.set_value(None);
        board.update(|b| {
            let _ = b.drag_end(Some(&target));
        });
    });

    let drag_cancel = Callback::new(move |()| {
        last_over.set_value(None);
        board.update(|b| {
            let _ = b.drag_end(None);
        });
    });

    BoardHook {
        columns,
        tasks,
        drag,
        add_column,
        rename_column,
        delete_column,
        add_task,
        rename_task,
        delete_task,
        drag_start_column,
        drag_start_task,
        drag_over,
        drop_on,
        drag_cancel,
    }
}
