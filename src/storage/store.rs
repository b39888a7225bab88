use super::{Repository, SeedData, Table};
use crate::{
    config::IdPolicy,
    error::{GradebookError, Result},
    model::{Course, Grade, Student},
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The three entity tables. References between them are not enforced; the
/// only cross-table rule is that deleting a student drops their grades.
#[derive(Debug, Clone)]
pub struct Store {
    pub students: Table<Student>,
    pub courses: Table<Course>,
    pub grades: Table<Grade>,
}

/// What [`Store::delete_student`] removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentRemoval {
    pub students: usize,
    pub grades: usize,
}

impl Store {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            students: Table::new(policy),
            courses: Table::new(policy),
            grades: Table::new(policy),
        }
    }

    pub fn from_seed(seed: SeedData, policy: IdPolicy) -> Self {
        let store = Self {
            students: Table::with_rows(seed.students, policy),
            courses: Table::with_rows(seed.courses, policy),
            grades: Table::with_rows(seed.grades, policy),
        };
        tracing::debug!(
            students = store.students.len(),
            courses = store.courses.len(),
            grades = store.grades.len(),
            ?policy,
            "store ready"
        );
        store
    }

    /// Removes the student and every grade recorded for them.
    pub fn delete_student(&mut self, id: i32) -> StudentRemoval {
        let students = self.students.delete(id);
        let grades = self.grades.remove_where(|g| g.student_id == id);
        tracing::debug!(id, grades, "cascaded grade removal");
        StudentRemoval { students, grades }
    }

    /// Removes the course only; students and grades pointing at it stay.
    pub fn delete_course(&mut self, id: i32) -> usize {
        self.courses.delete(id)
    }

    pub fn delete_grade(&mut self, id: i32) -> usize {
        self.grades.delete(id)
    }

    pub fn course_of(&self, course_id: i32) -> Option<Course> {
        self.courses.get(course_id)
    }

    pub fn student_of(&self, student_id: i32) -> Option<Student> {
        self.students.get(student_id)
    }
}

/// Cloneable handle to the process-wide [`Store`].
#[derive(Debug, Clone)]
pub struct SharedStore(Arc<RwLock<Store>>);

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Store>> {
        self.0
            .read()
            .map_err(|_| GradebookError::Storage("store lock poisoned".to_string()))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Store>> {
        self.0
            .write()
            .map_err(|_| GradebookError::Storage("store lock poisoned".to_string()))
    }
}
