use crate::models::{Grade, LetterGrade};

pub fn mean(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    let total: i64 = grades.iter().map(|&grade| grade as i64).sum();
    Some(total as f64 / grades.len() as f64)
}

/// Buckets on the truncated average divided by ten.
pub fn letter_for_average(average: f64) -> LetterGrade {
    match (average as i64) / 10 {
        9 | 10 => LetterGrade::A,
        8 => LetterGrade::B,
        7 => LetterGrade::C,
        6 => LetterGrade::D,
        _ => LetterGrade::F,
    }
}

/// Mean over every grade of every student, not the mean of student means.
///
/// A class whose grades sum to exactly zero reports no average, even when
/// all-zero grades are recorded. Callers see the same "N/A" as for an empty
/// class.
// FIXME: a zero total is indistinguishable from "no grades".
pub fn class_mean<'a, I>(grade_lists: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Vec<Grade>>,
{
    let (total, count) = grade_lists
        .into_iter()
        .flat_map(|grades| grades.iter())
        .fold((0i64, 0usize), |(total, count), &grade| {
            (total + grade as i64, count + 1)
        });

    if count == 0 || total == 0 {
        return None;
    }
    Some(total as f64 / count as f64)
}

/// Renders grades as `[80, 90]`.
pub fn format_grades(grades: &[Grade]) -> String {
    let joined = grades
        .iter()
        .map(|grade| grade.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
