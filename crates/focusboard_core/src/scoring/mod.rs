//! Scoring engine: score, quadrant placement and board views.
//!
//! # Responsibility
//! - Combine urgency and importance into one total score.
//! - Place tasks into Eisenhower quadrants, with manual override.
//! - Provide deterministic sorted and grouped views for display.
//!
//! # Invariants
//! - `calculate_score` is monotonically non-decreasing in each input.
//! - The quadrant threshold is the midpoint 5, inclusive on the high side:
//!   an axis value `>= 5` counts as urgent/important, so `(5,5)` always
//!   lands in `UrgentImportant`.
//! - All operations are stateless transformations; inputs are never mutated.

use crate::clock::now_epoch_ms;
use crate::model::task::{
    NewTaskRequest, QuadrantAssignment, Task, TaskId, TaskQuadrant, TaskValidationError, SCALE_MAX,
};
use uuid::Uuid;

/// Quadrant threshold on both axes. Values at or above it count as "high".
const MIDPOINT: u8 = 5;

/// Combines the two axis values into the total score.
///
/// Fixed formula: `urgency * importance`, giving the `[0,100]` range shown
/// as "Total Score" on the board. Monotone in each input with the other held
/// fixed.
pub fn calculate_score(urgency: u8, importance: u8) -> u16 {
    u16::from(urgency) * u16::from(importance)
}

/// Derives the auto placement for the given axis values.
pub fn determine_quadrant(urgency: u8, importance: u8) -> TaskQuadrant {
    match (urgency >= MIDPOINT, importance >= MIDPOINT) {
        (true, true) => TaskQuadrant::UrgentImportant,
        (true, false) => TaskQuadrant::UrgentNotImportant,
        (false, true) => TaskQuadrant::NotUrgentImportant,
        (false, false) => TaskQuadrant::NotUrgentNotImportant,
    }
}

/// Display label for one quadrant.
pub fn quadrant_label(quadrant: TaskQuadrant) -> &'static str {
    match quadrant {
        TaskQuadrant::UrgentImportant => "Urgent & Important",
        TaskQuadrant::UrgentNotImportant => "Urgent, Not Important",
        TaskQuadrant::NotUrgentImportant => "Not Urgent, Important",
        TaskQuadrant::NotUrgentNotImportant => "Not Urgent, Not Important",
    }
}

/// Display color token for one quadrant cell.
pub fn quadrant_color(quadrant: TaskQuadrant) -> &'static str {
    match quadrant {
        TaskQuadrant::UrgentImportant => "#fee2e2",
        TaskQuadrant::UrgentNotImportant => "#ffedd5",
        TaskQuadrant::NotUrgentImportant => "#dbeafe",
        TaskQuadrant::NotUrgentNotImportant => "#e5e7eb",
    }
}

/// Builds a task record with a generated ID and the current time.
///
/// # Errors
/// - `EmptyTitle` when the title is blank after trimming.
/// - `UrgencyOutOfRange` / `ImportanceOutOfRange` outside `[0,10]`.
pub fn build_task(request: &NewTaskRequest) -> Result<Task, TaskValidationError> {
    build_task_at(request, Uuid::new_v4(), now_epoch_ms())
}

/// Builds a task record with caller-provided ID and timestamp.
///
/// Used by tests and import paths that need deterministic identity; shares
/// all validation and derivation with [`build_task`].
pub fn build_task_at(
    request: &NewTaskRequest,
    id: TaskId,
    created_at_ms: i64,
) -> Result<Task, TaskValidationError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    if request.urgency > SCALE_MAX {
        return Err(TaskValidationError::UrgencyOutOfRange(request.urgency));
    }
    if request.importance > SCALE_MAX {
        return Err(TaskValidationError::ImportanceOutOfRange(request.importance));
    }

    let (quadrant, auto_assigned) = match request.assignment {
        QuadrantAssignment::Auto => (determine_quadrant(request.urgency, request.importance), true),
        QuadrantAssignment::Manual(quadrant) => (quadrant, false),
    };

    Ok(Task {
        id,
        title: title.to_string(),
        description: request.description.trim().to_string(),
        urgency: request.urgency,
        importance: request.importance,
        score: calculate_score(request.urgency, request.importance),
        quadrant,
        auto_assigned,
        created_at: created_at_ms,
    })
}

/// Returns tasks ordered by descending score, earlier `created_at` first on
/// ties.
///
/// The sort is stable, so records with equal score and timestamp keep their
/// input order. The input slice is left untouched.
pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
    sorted
}

/// Groups sorted tasks per quadrant in fixed matrix display order.
///
/// Every quadrant appears exactly once, empty cells included.
pub fn group_by_quadrant(tasks: &[Task]) -> Vec<(TaskQuadrant, Vec<Task>)> {
    let sorted = sort_tasks(tasks);
    TaskQuadrant::ALL
        .into_iter()
        .map(|quadrant| {
            let cell: Vec<Task> = sorted
                .iter()
                .filter(|task| task.quadrant == quadrant)
                .cloned()
                .collect();
            (quadrant, cell)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{calculate_score, determine_quadrant, quadrant_color, quadrant_label, MIDPOINT};
    use crate::model::task::TaskQuadrant;

    #[test]
    fn midpoint_counts_as_high_on_both_axes() {
        assert_eq!(
            determine_quadrant(MIDPOINT, MIDPOINT),
            TaskQuadrant::UrgentImportant
        );
        assert_eq!(
            determine_quadrant(MIDPOINT - 1, MIDPOINT),
            TaskQuadrant::NotUrgentImportant
        );
        assert_eq!(
            determine_quadrant(MIDPOINT, MIDPOINT - 1),
            TaskQuadrant::UrgentNotImportant
        );
    }

    #[test]
    fn score_covers_full_range() {
        assert_eq!(calculate_score(0, 0), 0);
        assert_eq!(calculate_score(10, 10), 100);
    }

    #[test]
    fn lookup_tables_are_total() {
        for quadrant in TaskQuadrant::ALL {
            assert!(!quadrant_label(quadrant).is_empty());
            assert!(quadrant_color(quadrant).starts_with('#'));
        }
    }
}
