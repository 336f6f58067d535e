use serde::{Deserialize, Serialize};

use crate::text::first_segment;

/// One exam sitting as read from the schedule sheet.
///
/// All fields are display-only text; nothing here is parsed as a date or
/// time. `course_code` and `course_name` may carry a `;`-separated tail of
/// alternative listings that is discarded at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub course_code: String,
    pub course_name: String,
}

impl ExamRow {
    /// Cleaned course code: the part of `course_code` before the first `;`.
    pub fn code(&self) -> &str {
        first_segment(&self.course_code, ';')
    }

    /// Cleaned course name: the part of `course_name` before the first `;`.
    pub fn name(&self) -> &str {
        first_segment(&self.course_name, ';')
    }
}
