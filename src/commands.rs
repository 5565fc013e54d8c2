use thiserror::Error;

use crate::models::Grade;

pub const MIN_GRADE: Grade = 0;
pub const MAX_GRADE: Grade = 100;

pub const KNOWN_COMMANDS: &str =
    "ADD_STUDENT, ADD_GRADE, REMOVE_STUDENT, REPORT, CLASS_REPORT, UNDO, LOG, EXIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStudent { name: String },
    AddGrade { name: String, grade: Grade },
    RemoveStudent { name: String },
    Report { name: String },
    ClassReport,
    Undo,
    Log,
    Exit,
    Unknown,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid grade: {0}")]
    InvalidGrade(String),

    #[error("Grade must be between 0 and 100")]
    GradeOutOfRange(Grade),
}

/// Parses one input line. The command word is matched case-sensitively;
/// anything unrecognized, including a blank line, is [`Command::Unknown`].
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "ADD_STUDENT" => Command::AddStudent {
            name: required_name(rest, "ADD_STUDENT <name>")?,
        },
        "ADD_GRADE" => parse_add_grade(rest)?,
        "REMOVE_STUDENT" => Command::RemoveStudent {
            name: required_name(rest, "REMOVE_STUDENT <name>")?,
        },
        "REPORT" => Command::Report {
            name: required_name(rest, "REPORT <name>")?,
        },
        "CLASS_REPORT" => Command::ClassReport,
        "UNDO" => Command::Undo,
        "LOG" => Command::Log,
        "EXIT" => Command::Exit,
        _ => Command::Unknown,
    };

    Ok(command)
}

fn required_name(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(usage));
    }
    Ok(rest.to_string())
}

fn parse_add_grade(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "ADD_GRADE <name> <grade>";

    let (name, raw_grade) = rest
        .split_once(char::is_whitespace)
        .map(|(name, raw)| (name, raw.trim()))
        .ok_or(CommandError::MissingArgument(USAGE))?;

    let grade = parse_grade(raw_grade)?;
    Ok(Command::AddGrade {
        name: name.to_string(),
        grade,
    })
}

/// Parses a grade and checks it against the 0..=100 scale.
pub fn parse_grade(raw: &str) -> Result<Grade, CommandError> {
    let grade: Grade = raw
        .parse()
        .map_err(|_| CommandError::InvalidGrade(raw.to_string()))?;
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(CommandError::GradeOutOfRange(grade));
    }
    Ok(grade)
}
