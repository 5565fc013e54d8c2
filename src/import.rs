use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::commands;
use crate::gradebook::Gradebook;
use crate::models::{Grade, ImportSummary};

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    grade: Option<String>,
}

/// Seeds the roster from a `name,grade` CSV. Rows for the same name are
/// gathered in file order; an empty grade column records the student alone.
/// Imported students carry activity entries but no undo history.
pub fn import_roster(gradebook: &mut Gradebook, csv_path: &Path) -> anyhow::Result<ImportSummary> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("failed to open roster {}", csv_path.display()))?;
    import_from_reader(gradebook, reader)
}

fn import_from_reader<R: std::io::Read>(
    gradebook: &mut Gradebook,
    mut reader: csv::Reader<R>,
) -> anyhow::Result<ImportSummary> {
    let mut order: Vec<(String, Vec<Grade>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (row_number, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = row_number + 2;
        let row = result.with_context(|| format!("malformed roster row {line}"))?;
        if row.name.is_empty() {
            anyhow::bail!("roster row {line} has no student name");
        }

        let slot = *index.entry(row.name.clone()).or_insert_with(|| {
            order.push((row.name.clone(), Vec::new()));
            order.len() - 1
        });

        if let Some(raw) = row.grade.as_deref().filter(|raw| !raw.is_empty()) {
            let grade = commands::parse_grade(raw)
                .with_context(|| format!("roster row {line} for {}", row.name))?;
            order[slot].1.push(grade);
        }
    }

    let mut summary = ImportSummary::default();
    for (name, grades) in order {
        let grade_count = grades.len();
        let inserted = if grades.is_empty() {
            gradebook.add_student(&name)
        } else {
            gradebook.add_student_with_grades(&name, grades)
        };

        if inserted {
            summary.students += 1;
            summary.grades += grade_count;
        } else {
            summary.skipped += 1;
        }
    }

    info!(
        students = summary.students,
        grades = summary.grades,
        skipped = summary.skipped,
        "imported roster"
    );
    Ok(summary)
}
