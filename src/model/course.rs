use super::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
}

impl Entity for Course {
    type Draft = NewCourse;
    const KIND: &'static str = "course";

    fn id(&self) -> i32 {
        self.id
    }

    fn from_draft(id: i32, draft: NewCourse) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}
