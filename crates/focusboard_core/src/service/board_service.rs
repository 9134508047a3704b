//! Task board use-case service.
//!
//! # Responsibility
//! - Maintain the task list behind the Eisenhower matrix.
//! - Hydrate from and write through to the `agentic-tasks` store key.
//!
//! # Invariants
//! - Tasks are appended and removed whole; no in-place field mutation.
//! - Store or decode failures degrade to an empty board with a warning,
//!   never an error.

use crate::model::task::{NewTaskRequest, Task, TaskId, TaskQuadrant, TaskValidationError};
use crate::repo::state_repo::StateStore;
use crate::scoring::{build_task, group_by_quadrant};
use log::warn;

/// Store key holding the serialized task list.
pub const TASKS_STATE_KEY: &str = "agentic-tasks";

/// Use-case service for the task board.
pub struct BoardService<S: StateStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: StateStore> BoardService<S> {
    /// Creates the service and hydrates the task list from the store.
    pub fn new(store: S) -> Self {
        let tasks = hydrate_tasks(&store);
        Self { store, tasks }
    }

    /// Validates, builds and appends one task, then writes through.
    ///
    /// Returns the stored record. Validation failures surface to the caller;
    /// persistence failures are logged and swallowed.
    pub fn add_task(&mut self, request: &NewTaskRequest) -> Result<Task, TaskValidationError> {
        let task = build_task(request)?;
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Removes a completed task by ID.
    ///
    /// Returns `false` when the ID is unknown; unknown IDs are not an error
    /// because completion races with display refreshes.
    pub fn complete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// All stored tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of open tasks shown in the board header.
    pub fn open_task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sorted matrix view: one entry per quadrant in display order.
    pub fn matrix(&self) -> Vec<(TaskQuadrant, Vec<Task>)> {
        group_by_quadrant(&self.tasks)
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.tasks) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=state_persist module=board status=warn key={TASKS_STATE_KEY} error={err}"
                );
                return;
            }
        };
        if let Err(err) = self.store.set(TASKS_STATE_KEY, &payload) {
            warn!("event=state_persist module=board status=warn key={TASKS_STATE_KEY} error={err}");
        }
    }
}

fn hydrate_tasks<S: StateStore>(store: &S) -> Vec<Task> {
    let stored = match store.get(TASKS_STATE_KEY) {
        Ok(stored) => stored,
        Err(err) => {
            warn!("event=state_hydrate module=board status=warn key={TASKS_STATE_KEY} error={err}");
            return Vec::new();
        }
    };

    let Some(payload) = stored else {
        return Vec::new();
    };

    match serde_json::from_str(&payload) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("event=state_hydrate module=board status=warn key={TASKS_STATE_KEY} error={err}");
            Vec::new()
        }
    }
}
