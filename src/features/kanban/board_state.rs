use crate::models::{Column, Task};

use super::reorder::array_move;

/// What the current drag gesture is holding, if anything.
///
/// The `Dragging` variants carry the full record captured at gesture start,
/// so the view can render a placeholder for the active element without a
/// lookup. The record may go stale while the gesture is in flight; every
/// reconciliation re-resolves ids against the live collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::DraggingColumn(column) => Some(column.id.as_str()),
            DragState::DraggingTask(task) => Some(task.id.as_str()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// A drop candidate under the pointer, tagged with the kind of element the
/// pointer is over.
#[derive(Debug, Clone, PartialEq)]
pub enum DropTarget {
    Column(String),
    Task(String),
}

impl DropTarget {
    pub fn id(&self) -> &str {
        match self {
            DropTarget::Column(id) | DropTarget::Task(id) => id,
        }
    }
}

/// Whether an operation changed the board.
///
/// Ids that no longer resolve (stale events arriving after a concurrent
/// mutation) are `Ignored`, never an error: the worst outcome of a bad id
/// is a dropped UI action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Ignored,
}

impl EditOutcome {
    pub fn applied(self) -> bool {
        matches!(self, EditOutcome::Applied)
    }
}

/// Owns the two ordered collections and the drag state machine.
///
/// Column order is display order. A column's visible task order is the
/// subsequence of `tasks` carrying its id, so a cross-column move relabels
/// `column_id` and repositions the task in one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    drag: DragState,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks assigned to one column, in display order.
    pub fn tasks_in(&self, column_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn add_column(&mut self) -> String {
        let column = Column::new(format!("Column {}", self.columns.len() + 1));
        let id = column.id.clone();
        self.columns.push(column);
        id
    }

    pub fn rename_column(&mut self, id: &str, title: String) -> EditOutcome {
        match self.columns.iter_mut().find(|col| col.id == id) {
            Some(column) => {
                column.update_title(title);
                EditOutcome::Applied
            }
            None => EditOutcome::Ignored,
        }
    }

    /// Removes the column and every task assigned to it in one transition,
    /// so no observer ever sees a task pointing at a missing column.
    pub fn delete_column(&mut self, id: &str) -> EditOutcome {
        if !self.columns.iter().any(|col| col.id == id) {
            return EditOutcome::Ignored;
        }
        self.columns.retain(|col| col.id != id);
        self.tasks.retain(|t| t.column_id != id);
        EditOutcome::Applied
    }

    /// Creates nothing when `column_id` is stale: a task must never enter
    /// the board pointing at a column that does not exist.
    pub fn add_task(&mut self, column_id: &str) -> Option<String> {
        if !self.columns.iter().any(|col| col.id == column_id) {
            return None;
        }
        let task = Task::new(
            column_id.to_string(),
            format!("Task {}", self.tasks.len() + 1),
        );
        let id = task.id.clone();
        self.tasks.push(task);
        Some(id)
    }

    pub fn rename_task(&mut self, id: &str, content: String) -> EditOutcome {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.update_content(content);
                EditOutcome::Applied
            }
            None => EditOutcome::Ignored,
        }
    }

    pub fn delete_task(&mut self, id: &str) -> EditOutcome {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            EditOutcome::Ignored
        } else {
            EditOutcome::Applied
        }
    }

    pub fn drag_start_column(&mut self, column: Column) {
        self.drag = DragState::DraggingColumn(column);
    }

    pub fn drag_start_task(&mut self, task: Task) {
        self.drag = DragState::DraggingTask(task);
    }

    /// One reconciliation step while the pointer hovers `target`.
    ///
    /// Only a dragged task reorders here; a dragged column waits for
    /// `drag_end`. Hovering a sibling task adopts that task's column and
    /// takes its index in the global sequence; hovering a column body only
    /// relabels, the index is untouched.
    pub fn drag_over(&mut self, target: &DropTarget) -> EditOutcome {
        let active_id = match &self.drag {
            DragState::DraggingTask(task) => task.id.clone(),
            _ => return EditOutcome::Ignored,
        };
        if active_id == target.id() {
            return EditOutcome::Ignored;
        }
        let from = match self.tasks.iter().position(|t| t.id == active_id) {
            Some(index) => index,
            None => return EditOutcome::Ignored,
        };

        match target {
            DropTarget::Task(over_id) => {
                let to = match self.tasks.iter().position(|t| t.id == *over_id) {
                    Some(index) => index,
                    None => return EditOutcome::Ignored,
                };
                let adopted = self.tasks[to].column_id.clone();
                self.tasks[from].column_id = adopted;
                self.tasks = array_move(&self.tasks, from, to);
                EditOutcome::Applied
            }
            DropTarget::Column(over_id) => {
                if !self.columns.iter().any(|col| col.id == *over_id) {
                    return EditOutcome::Ignored;
                }
                self.tasks[from].column_id = over_id.clone();
                EditOutcome::Applied
            }
        }
    }

    /// Ends the gesture. The machine returns to `Idle` unconditionally; a
    /// column released over another column is relocated to that column's
    /// index. `None` is a cancelled gesture (released outside any target).
    pub fn drag_end(&mut self, target: Option<&DropTarget>) -> EditOutcome {
        let column = match std::mem::take(&mut self.drag) {
            DragState::DraggingColumn(column) => column,
            _ => return EditOutcome::Ignored,
        };
        let target = match target {
            Some(target) => target,
            None => return EditOutcome::Ignored,
        };
        if column.id == target.id() {
            return EditOutcome::Ignored;
        }
        let from = match self.columns.iter().position(|col| col.id == column.id) {
            Some(index) => index,
            None => return EditOutcome::Ignored,
        };
        let to = match self.columns.iter().position(|col| col.id == target.id()) {
            Some(index) => index,
            None => return EditOutcome::Ignored,
        };
        self.columns = array_move(&self.columns, from, to);
        EditOutcome::Applied
    }
}
