use crate::gradebook::Gradebook;
use crate::models::Grade;

/// Inverse of one earlier roster mutation, carrying only what it needs to
/// reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// Reverses an added student by removing them again.
    AddStudent { name: String },
    /// Reverses an appended grade by dropping the student's last grade.
    AddGrade { name: String },
    /// Restores a removed student who had no grades.
    RemoveEmptyStudent { name: String },
    /// Restores a removed student together with the grades they held.
    RemoveStudentWithGrades { name: String, grades: Vec<Grade> },
}

impl UndoAction {
    /// Re-mutates the roster. Never pushes onto the undo stack.
    pub fn apply(self, gradebook: &mut Gradebook) {
        tracing::debug!(action = ?self, "applying undo action");
        match self {
            UndoAction::AddStudent { name } => {
                gradebook.remove_student_unrecorded(&name);
            }
            UndoAction::AddGrade { name } => {
                gradebook.remove_last_grade(&name);
            }
            UndoAction::RemoveEmptyStudent { name } => {
                gradebook.add_student(&name);
            }
            UndoAction::RemoveStudentWithGrades { name, grades } => {
                gradebook.add_student_with_grades(&name, grades);
            }
        }
    }
}

/// Unbounded LIFO of pending inverses.
#[derive(Debug, Default)]
pub struct UndoStack {
    actions: Vec<UndoAction>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UndoAction) {
        self.actions.push(action);
    }

    pub fn pop(&mut self) -> Option<UndoAction> {
        self.actions.pop()
    }

    pub fn peek(&self) -> Option<&UndoAction> {
        self.actions.last()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
