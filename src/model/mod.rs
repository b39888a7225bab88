//! Data models for the gradebook.
//!
//! This module defines the core records:
//!
//! - [`Student`]: a person enrolled in one course
//! - [`Course`]: a course with a name and description
//! - [`Grade`]: a mark a student received in a course
//!
//! Each record has a matching draft type ([`NewStudent`], [`NewCourse`],
//! [`NewGrade`]) carrying everything except the id, which the store assigns.

mod course;
mod entity;
mod grade;
mod student;

pub use course::{Course, NewCourse};
pub use entity::Entity;
pub use grade::{Grade, NewGrade};
pub use student::{NewStudent, Student};
