use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::exam::ExamRow;

/// One selectable course: cleaned code and name, deduplicated over the
/// whole schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOption {
    pub code: String,
    pub name: String,
}

impl CourseOption {
    /// Display label in the `CODE - Name` form used by selection lists.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

/// An ordered exam schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub rows: Vec<ExamRow>,
}

impl Schedule {
    pub fn new(rows: Vec<ExamRow>) -> Self {
        Self { rows }
    }

    /// Unique cleaned code/name pairs, in order of first appearance.
    pub fn courses(&self) -> Vec<CourseOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for row in &self.rows {
            let option = CourseOption {
                code: row.code().to_string(),
                name: row.name().to_string(),
            };
            if seen.insert((option.code.clone(), option.name.clone())) {
                options.push(option);
            }
        }
        options
    }

    /// Rows whose cleaned course code matches one of `codes` exactly.
    ///
    /// The match is case-sensitive and input order is preserved.
    pub fn filter_by_codes<S: AsRef<str>>(&self, codes: &[S]) -> Vec<ExamRow> {
        self.rows
            .iter()
            .filter(|row| codes.iter().any(|code| code.as_ref() == row.code()))
            .cloned()
            .collect()
    }
}
