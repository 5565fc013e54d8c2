use std::collections::HashMap;

use tracing::debug;

use crate::activity::ActivityLog;
use crate::grading;
use crate::models::{Grade, LetterGrade};
use crate::undo::{UndoAction, UndoStack};

/// Returned by [`Gradebook::remove_last_grade`] when nothing was removed.
pub const NO_GRADE: Grade = -1;

/// In-memory roster with its activity log and undo history.
///
/// Every successful user-level mutation updates the roster, then prepends one
/// activity entry, then pushes its inverse. Failed mutations touch none of
/// the three.
#[derive(Debug, Default)]
pub struct Gradebook {
    grades_by_student: HashMap<String, Vec<Grade>>,
    activity: ActivityLog,
    undo_stack: UndoStack,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_student_grades(&self, name: &str) -> Option<&[Grade]> {
        self.grades_by_student.get(name).map(Vec::as_slice)
    }

    pub fn student_count(&self) -> usize {
        self.grades_by_student.len()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Adds a student with no grades. Does not push an undo action.
    pub fn add_student(&mut self, name: &str) -> bool {
        if self.grades_by_student.contains_key(name) {
            return false;
        }
        self.grades_by_student.insert(name.to_string(), Vec::new());
        self.activity.record(format!("Added student {name}"));
        debug!(student = name, "added student");
        true
    }

    /// Adds a student with a pre-populated grade list. Does not push an undo
    /// action.
    pub fn add_student_with_grades(&mut self, name: &str, grades: Vec<Grade>) -> bool {
        if self.grades_by_student.contains_key(name) {
            return false;
        }
        let rendered = grading::format_grades(&grades);
        self.grades_by_student.insert(name.to_string(), grades);
        self.activity
            .record(format!("Added student {name} with grades {rendered}"));
        debug!(student = name, grades = %rendered, "added student with grades");
        true
    }

    /// Appends a grade. The core accepts any integer; range checks belong to
    /// the command layer.
    pub fn add_grade(&mut self, name: &str, grade: Grade) -> bool {
        let Some(grades) = self.grades_by_student.get_mut(name) else {
            return false;
        };
        grades.push(grade);
        self.activity
            .record(format!("Added grade {grade} for student {name}"));
        self.undo_stack.push(UndoAction::AddGrade {
            name: name.to_string(),
        });
        debug!(student = name, grade, "added grade");
        true
    }

    /// Removes and returns the most recent grade, or [`NO_GRADE`] after
    /// logging why nothing was removed. Never pushes an undo action.
    pub fn remove_last_grade(&mut self, name: &str) -> Grade {
        let Some(grades) = self.grades_by_student.get_mut(name) else {
            self.activity
                .record(format!("{name} is not in the student list"));
            return NO_GRADE;
        };
        match grades.pop() {
            Some(grade) => {
                self.activity
                    .record(format!("Removed grade {grade} for student {name}"));
                debug!(student = name, grade, "removed last grade");
                grade
            }
            None => {
                self.activity.record(format!("No grade for student {name}"));
                NO_GRADE
            }
        }
    }

    pub fn remove_student(&mut self, name: &str) -> bool {
        match self.remove_student_unrecorded(name) {
            Some(inverse) => {
                self.undo_stack.push(inverse);
                true
            }
            None => false,
        }
    }

    /// Removes a student and logs it, returning the inverse instead of
    /// pushing it. The captured grades are moved out of the roster.
    pub(crate) fn remove_student_unrecorded(&mut self, name: &str) -> Option<UndoAction> {
        let grades = self.grades_by_student.remove(name)?;
        debug!(student = name, grade_count = grades.len(), "removed student");
        let name = name.to_string();
        if grades.is_empty() {
            self.activity.record(format!(
                "Removed student {name} there were no grades currently recorded"
            ));
            Some(UndoAction::RemoveEmptyStudent { name })
        } else {
            self.activity.record(format!(
                "Removed student {name} with grades {}",
                grading::format_grades(&grades)
            ));
            Some(UndoAction::RemoveStudentWithGrades { name, grades })
        }
    }

    pub fn average_for(&self, name: &str) -> Option<f64> {
        self.grades_by_student
            .get(name)
            .and_then(|grades| grading::mean(grades))
    }

    /// Letter grade for the student's average. Logs the outcome whenever a
    /// letter is produced.
    pub fn letter_grade_for(&mut self, name: &str) -> Option<LetterGrade> {
        let average = self.average_for(name)?;
        let letter = grading::letter_for_average(average);
        let entry = match letter {
            LetterGrade::A => format!("{name}'s letter grade is an A"),
            LetterGrade::F => format!("{name} has failed"),
            other => format!("{name}'s letter grade is a {other}"),
        };
        self.activity.record(entry);
        Some(letter)
    }

    pub fn class_average(&self) -> Option<f64> {
        if self.grades_by_student.is_empty() {
            return None;
        }
        grading::class_mean(self.grades_by_student.values())
    }

    /// Pops and applies the most recent inverse, then logs the undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };
        action.apply(self);
        self.activity.record("Undid last action");
        true
    }

    pub fn recent_log(&self, max_items: usize) -> Vec<String> {
        self.activity.recent(max_items)
    }

    pub fn log_len(&self) -> usize {
        self.activity.len()
    }
}
