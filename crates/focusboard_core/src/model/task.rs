//! Task domain model for the Eisenhower matrix.
//!
//! # Responsibility
//! - Define the task record and its quadrant enumeration.
//! - Validate caller-supplied axis values and titles at build time.
//!
//! # Invariants
//! - `score` is always derived from `(urgency, importance)`, never stored
//!   independently of them.
//! - `quadrant` is either the auto-derived placement or a manual override,
//!   recorded by `auto_assigned`.
//! - Wire field names stay camelCase to match the persisted board layout.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one task record.
pub type TaskId = Uuid;

/// Lower bound of the urgency/importance scale.
pub const SCALE_MIN: u8 = 0;
/// Upper bound of the urgency/importance scale.
pub const SCALE_MAX: u8 = 10;

/// The four Eisenhower placement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskQuadrant {
    UrgentImportant,
    UrgentNotImportant,
    NotUrgentImportant,
    NotUrgentNotImportant,
}

impl TaskQuadrant {
    /// All quadrants in fixed matrix display order.
    pub const ALL: [TaskQuadrant; 4] = [
        TaskQuadrant::UrgentImportant,
        TaskQuadrant::UrgentNotImportant,
        TaskQuadrant::NotUrgentImportant,
        TaskQuadrant::NotUrgentNotImportant,
    ];
}

/// Caller intent for quadrant placement.
///
/// Modeled as a tagged union so "auto placement plus an ignored manual
/// value" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadrantAssignment {
    /// Derive the quadrant from `(urgency, importance)`.
    Auto,
    /// Place the task into the given quadrant regardless of its scores.
    Manual(TaskQuadrant),
}

/// Validation error raised when building a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Urgency outside the `[0,10]` scale.
    UrgencyOutOfRange(u8),
    /// Importance outside the `[0,10]` scale.
    ImportanceOutOfRange(u8),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::UrgencyOutOfRange(value) => {
                write!(f, "urgency {value} outside range {SCALE_MIN}..={SCALE_MAX}")
            }
            Self::ImportanceOutOfRange(value) => {
                write!(
                    f,
                    "importance {value} outside range {SCALE_MIN}..={SCALE_MAX}"
                )
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record placed on the board.
///
/// Built exclusively through [`crate::scoring::build_task`]; fields are public
/// for read access and serde, but records are treated as immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID generated at build time.
    pub id: TaskId,
    /// Non-empty trimmed title.
    pub title: String,
    /// Optional free-text context; may be empty.
    pub description: String,
    /// Axis value in `[0,10]`.
    pub urgency: u8,
    /// Axis value in `[0,10]`.
    pub importance: u8,
    /// Derived total score, `urgency * importance`.
    pub score: u16,
    /// Final placement after auto derivation or manual override.
    pub quadrant: TaskQuadrant,
    /// Whether `quadrant` was derived rather than manually chosen.
    pub auto_assigned: bool,
    /// Unix epoch milliseconds at build time.
    pub created_at: i64,
}

/// Input for building one task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    pub title: String,
    pub description: String,
    pub urgency: u8,
    pub importance: u8,
    pub assignment: QuadrantAssignment,
}

impl NewTaskRequest {
    /// Convenience constructor for auto-placed tasks.
    pub fn auto(
        title: impl Into<String>,
        description: impl Into<String>,
        urgency: u8,
        importance: u8,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            urgency,
            importance,
            assignment: QuadrantAssignment::Auto,
        }
    }
}
