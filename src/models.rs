use std::fmt;

pub type Grade = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub name: String,
    pub grades: Vec<Grade>,
    pub average: Option<f64>,
    pub letter: Option<LetterGrade>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassReport {
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub students: usize,
    pub grades: usize,
    pub skipped: usize,
}
