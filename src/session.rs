use tracing::warn;

use crate::commands::{self, Command, KNOWN_COMMANDS};
use crate::gradebook::Gradebook;
use crate::models::{ClassReport, StudentReport};
use crate::report;

pub const DEFAULT_LOG_LIMIT: usize = 10;

/// Text produced by one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
    pub exit: bool,
}

impl Outcome {
    fn done(output: impl Into<String>, success: bool) -> Self {
        Self {
            output: line(output),
            success,
            exit: false,
        }
    }
}

fn line(text: impl Into<String>) -> String {
    let mut text = text.into();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Drives a [`Gradebook`] from raw command lines.
#[derive(Debug)]
pub struct Session {
    gradebook: Gradebook,
    log_limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Gradebook::new(), DEFAULT_LOG_LIMIT)
    }
}

impl Session {
    pub fn new(gradebook: Gradebook, log_limit: usize) -> Self {
        Self {
            gradebook,
            log_limit,
        }
    }

    pub fn gradebook(&self) -> &Gradebook {
        &self.gradebook
    }

    pub fn gradebook_mut(&mut self) -> &mut Gradebook {
        &mut self.gradebook
    }

    pub fn handle_line(&mut self, input: &str) -> Outcome {
        match commands::parse(input) {
            Ok(command) => self.execute(command),
            Err(err) => {
                warn!(input, error = %err, "rejected command");
                Outcome::done(err.to_string(), false)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::AddStudent { name } => {
                if self.gradebook.add_student(&name) {
                    Outcome::done(format!("Added student: {name}"), true)
                } else {
                    Outcome::done(format!("Student already exists: {name}"), false)
                }
            }
            Command::AddGrade { name, grade } => {
                if self.gradebook.add_grade(&name, grade) {
                    Outcome::done(format!("Added grade {grade} for {name}"), true)
                } else {
                    Outcome::done(format!("Student not found: {name}"), false)
                }
            }
            Command::RemoveStudent { name } => {
                if self.gradebook.remove_student(&name) {
                    Outcome::done(format!("Removed student: {name}"), true)
                } else {
                    Outcome::done(format!("Student not found: {name}"), false)
                }
            }
            Command::Report { name } => match self.student_report(&name) {
                Some(student) => Outcome::done(report::build_student_report(&student), true),
                None => Outcome::done(format!("Student not found: {name}"), false),
            },
            Command::ClassReport => {
                let class = ClassReport {
                    average: self.gradebook.class_average(),
                };
                Outcome::done(report::build_class_report(&class), class.average.is_some())
            }
            Command::Undo => {
                if self.gradebook.undo() {
                    Outcome::done("Undo successful", true)
                } else {
                    Outcome::done("Nothing to undo", false)
                }
            }
            Command::Log => {
                let entries = self.gradebook.recent_log(self.log_limit);
                let success = !entries.is_empty();
                Outcome::done(report::build_activity_listing(&entries), success)
            }
            Command::Exit => Outcome {
                output: line("Goodbye!"),
                success: true,
                exit: true,
            },
            Command::Unknown => Outcome::done(
                format!("Unknown command. Try: {KNOWN_COMMANDS}"),
                false,
            ),
        }
    }

    fn student_report(&mut self, name: &str) -> Option<StudentReport> {
        let grades = self.gradebook.find_student_grades(name)?.to_vec();
        let average = self.gradebook.average_for(name);
        let letter = self.gradebook.letter_grade_for(name);
        Some(StudentReport {
            name: name.to_string(),
            grades,
            average,
            letter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, input: &str) -> Outcome {
        session.handle_line(input)
    }

    #[test]
    fn add_commands_report_success_and_failure() {
        let mut session = Session::default();

        let added = run(&mut session, "ADD_STUDENT Alice");
        assert_eq!(added.output, "Added student: Alice\n");
        assert!(added.success);

        let duplicate = run(&mut session, "ADD_STUDENT Alice");
        assert_eq!(duplicate.output, "Student already exists: Alice\n");
        assert!(!duplicate.success);

        assert_eq!(
            run(&mut session, "ADD_GRADE Alice 90").output,
            "Added grade 90 for Alice\n"
        );
        assert_eq!(
            run(&mut session, "ADD_GRADE Bob 90").output,
            "Student not found: Bob\n"
        );
    }

    #[test]
    fn invalid_grades_never_reach_the_gradebook() {
        let mut session = Session::default();
        run(&mut session, "ADD_STUDENT Alice");

        let out_of_range = run(&mut session, "ADD_GRADE Alice 120");
        assert_eq!(out_of_range.output, "Grade must be between 0 and 100\n");
        assert!(!out_of_range.success);

        let garbled = run(&mut session, "ADD_GRADE Alice A+");
        assert_eq!(garbled.output, "Invalid grade: A+\n");

        assert_eq!(session.gradebook().find_student_grades("Alice"), Some(&[][..]));
        assert_eq!(session.gradebook().log_len(), 1);
    }

    #[test]
    fn report_logs_letter_grade() {
        let mut session = Session::default();
        run(&mut session, "ADD_STUDENT Grace");
        run(&mut session, "ADD_GRADE Grace 80");
        run(&mut session, "ADD_GRADE Grace 91");

        let outcome = run(&mut session, "REPORT Grace");
        assert_eq!(
            outcome.output,
            "Report for Grace:\n  Grades: [80, 91]\n  Average: 85.50\n  Letter Grade: B\n"
        );
        assert_eq!(
            session.gradebook().recent_log(1),
            vec!["Grace's letter grade is a B"]
        );
    }

    #[test]
    fn report_for_missing_student() {
        let mut session = Session::default();
        let outcome = run(&mut session, "REPORT Nobody");
        assert_eq!(outcome.output, "Student not found: Nobody\n");
        assert!(!outcome.success);
    }

    #[test]
    fn class_report_and_undo() {
        let mut session = Session::default();
        assert_eq!(
            run(&mut session, "CLASS_REPORT").output,
            "Class Average: N/A (no grades in system)\n"
        );
        run(&mut session, "ADD_STUDENT Mia");
        run(&mut session, "ADD_GRADE Mia 90");
        run(&mut session, "ADD_STUDENT Nina");
        run(&mut session, "ADD_GRADE Nina 80");
        run(&mut session, "ADD_GRADE Nina 85");
        assert_eq!(
            run(&mut session, "CLASS_REPORT").output,
            "Class Average: 85.00\n"
        );

        assert_eq!(run(&mut session, "UNDO").output, "Undo successful\n");
        assert_eq!(
            run(&mut session, "CLASS_REPORT").output,
            "Class Average: 85.00\n"
        );
        run(&mut session, "UNDO");
        run(&mut session, "UNDO");
        let exhausted = run(&mut session, "UNDO");
        assert_eq!(exhausted.output, "Nothing to undo\n");
        assert!(!exhausted.success);
    }

    #[test]
    fn log_respects_limit() {
        let mut session = Session::new(Gradebook::new(), 2);
        assert_eq!(run(&mut session, "LOG").output, "No activity logged yet\n");

        run(&mut session, "ADD_STUDENT Frank");
        run(&mut session, "ADD_GRADE Frank 88");
        run(&mut session, "REMOVE_STUDENT Frank");

        assert_eq!(
            run(&mut session, "LOG").output,
            "Recent activity:\n  - Removed student Frank with grades [88]\n  - Added grade 88 for student Frank\n"
        );
    }

    #[test]
    fn exit_and_unknown() {
        let mut session = Session::default();
        let unknown = run(&mut session, "DANCE");
        assert!(unknown.output.starts_with("Unknown command. Try: ADD_STUDENT"));
        assert!(!unknown.exit);

        let exit = run(&mut session, "EXIT");
        assert_eq!(exit.output, "Goodbye!\n");
        assert!(exit.exit);
    }
}
