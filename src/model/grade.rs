use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub id: i32,

    #[serde(rename = "courseID")]
    pub course_id: i32,

    #[serde(rename = "studentID")]
    pub student_id: i32,

    /// Unranged; no scale is enforced.
    pub grade: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrade {
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

impl Entity for Grade {
    type Draft = NewGrade;
    const KIND: &'static str = "grade";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewGrade) -> Self {
        Self {
            id,
            course_id: draft.course_id,
            student_id: draft.student_id,
            grade: draft.grade,
        }
    }
}
