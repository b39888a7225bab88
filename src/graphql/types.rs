use super::schema::store;
use crate::model;
use async_graphql::{ComplexObject, Context, SimpleObject};

/// A student enrolled in a course
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    #[graphql(name = "courseID")]
    pub course_id: i32,
}

#[ComplexObject]
impl Student {
    /// The course referenced by `courseID`, or null if it does not exist
    async fn course(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Course>> {
        let store = store(ctx)?.read()?;
        Ok(store.course_of(self.course_id).map(Into::into))
    }
}

impl From<model::Student> for Student {
    fn from(s: model::Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            lastname: s.lastname,
            course_id: s.course_id,
        }
    }
}

/// A course students can enroll in
#[derive(SimpleObject, Clone)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<model::Course> for Course {
    fn from(c: model::Course) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

/// A grade a student received in a course
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Grade {
    pub id: i32,
    #[graphql(name = "courseID")]
    pub course_id: i32,
    #[graphql(name = "studentID")]
    pub student_id: i32,
    pub grade: i32,
}

#[ComplexObject]
impl Grade {
    /// The course referenced by `courseID`, or null if it does not exist
    async fn course(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Course>> {
        let store = store(ctx)?.read()?;
        Ok(store.course_of(self.course_id).map(Into::into))
    }

    /// The student referenced by `studentID`, or null if it does not exist
    async fn student(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Student>> {
        let store = store(ctx)?.read()?;
        Ok(store.student_of(self.student_id).map(Into::into))
    }
}

impl From<model::Grade> for Grade {
    fn from(g: model::Grade) -> Self {
        Self {
            id: g.id,
            course_id: g.course_id,
            student_id: g.student_id,
            grade: g.grade,
        }
    }
}

/// Result of a delete mutation. Carries only the requested id, whether or
/// not a record was actually removed.
#[derive(SimpleObject, Clone, Copy)]
pub struct Deleted {
    pub id: i32,
}
