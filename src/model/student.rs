use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,

    /// Not checked against the course table.
    #[serde(rename = "courseID")]
    pub course_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub lastname: String,
    pub course_id: i32,
}

impl Entity for Student {
    type Draft = NewStudent;
    const KIND: &'static str = "student";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewStudent) -> Self {
        Self {
            id,
            name: draft.name,
            lastname: draft.lastname,
            course_id: draft.course_id,
        }
    }
}
