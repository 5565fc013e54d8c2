use std::fmt::Write;

use crate::grading;
use crate::models::{ClassReport, StudentReport};

pub fn build_student_report(report: &StudentReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Report for {}:", report.name);
    let _ = writeln!(output, "  Grades: {}", grading::format_grades(&report.grades));

    match report.average {
        Some(average) => {
            let _ = writeln!(output, "  Average: {average:.2}");
        }
        None => {
            let _ = writeln!(output, "  Average: N/A (no grades)");
        }
    }

    match report.letter {
        Some(letter) => {
            let _ = writeln!(output, "  Letter Grade: {letter}");
        }
        None => {
            let _ = writeln!(output, "  Letter Grade: N/A");
        }
    }

    output
}

pub fn build_class_report(report: &ClassReport) -> String {
    match report.average {
        Some(average) => format!("Class Average: {average:.2}\n"),
        None => "Class Average: N/A (no grades in system)\n".to_string(),
    }
}

pub fn build_activity_listing(entries: &[String]) -> String {
    let mut output = String::new();

    if entries.is_empty() {
        let _ = writeln!(output, "No activity logged yet");
        return output;
    }

    let _ = writeln!(output, "Recent activity:");
    for entry in entries {
        let _ = writeln!(output, "  - {entry}");
    }

    output
}
