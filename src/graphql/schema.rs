use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::{NewCourse, NewGrade, NewStudent};
use crate::storage::{Repository, SharedStore};

use super::types::*;

pub type GradebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> GradebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List of all students
    async fn students(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Student>> {
        let store = store(ctx)?.read()?;
        Ok(store.students.list().into_iter().map(Into::into).collect())
    }

    /// List of all courses
    async fn courses(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Course>> {
        let store = store(ctx)?.read()?;
        Ok(store.courses.list().into_iter().map(Into::into).collect())
    }

    /// List of all grades
    async fn grades(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Grade>> {
        let store = store(ctx)?.read()?;
        Ok(store.grades.list().into_iter().map(Into::into).collect())
    }

    /// A particular student
    async fn student(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Student>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read()?;
        Ok(store.students.get(id).map(Into::into))
    }

    /// A particular course
    async fn course(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Course>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read()?;
        Ok(store.courses.get(id).map(Into::into))
    }

    /// A particular grade
    async fn grade(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Grade>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let store = store(ctx)?.read()?;
        Ok(store.grades.get(id).map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a student
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        lastname: String,
        #[graphql(name = "courseID")] course_id: i32,
    ) -> async_graphql::Result<Student> {
        let mut store = store(ctx)?.write()?;
        let student = store.students.create(NewStudent {
            name,
            lastname,
            course_id,
        })?;
        Ok(student.into())
    }

    /// Add a course
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> async_graphql::Result<Course> {
        let mut store = store(ctx)?.write()?;
        let course = store.courses.create(NewCourse { name, description })?;
        Ok(course.into())
    }

    /// Add a grade
    async fn add_grade(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "courseID")] course_id: i32,
        #[graphql(name = "studentID")] student_id: i32,
        grade: i32,
    ) -> async_graphql::Result<Grade> {
        let mut store = store(ctx)?.write()?;
        let grade = store.grades.create(NewGrade {
            course_id,
            student_id,
            grade,
        })?;
        Ok(grade.into())
    }

    /// Delete a student together with all of their grades
    async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Deleted> {
        let mut store = store(ctx)?.write()?;
        store.delete_student(id);
        Ok(Deleted { id })
    }

    /// Delete a course. Students and grades referencing it are kept.
    #[graphql(name = "deletecourse")]
    async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Deleted> {
        let mut store = store(ctx)?.write()?;
        store.delete_course(id);
        Ok(Deleted { id })
    }

    /// Delete a grade
    #[graphql(name = "deletegrade")]
    async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Deleted> {
        let mut store = store(ctx)?.write()?;
        store.delete_grade(id);
        Ok(Deleted { id })
    }
}
