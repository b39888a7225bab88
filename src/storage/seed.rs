use crate::{
    error::{GradebookError, Result},
    model::{Course, Grade, Student},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const COURSES_FILE: &str = "courses.json";
const STUDENTS_FILE: &str = "students.json";
const GRADES_FILE: &str = "grades.json";

const EMBEDDED_COURSES: &str = include_str!("../../data/courses.json");
const EMBEDDED_STUDENTS: &str = include_str!("../../data/students.json");
const EMBEDDED_GRADES: &str = include_str!("../../data/grades.json");

/// Initial records for a fresh [`Store`](super::Store).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub grades: Vec<Grade>,
}

impl SeedData {
    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            courses: parse(COURSES_FILE, EMBEDDED_COURSES)?,
            students: parse(STUDENTS_FILE, EMBEDDED_STUDENTS)?,
            grades: parse(GRADES_FILE, EMBEDDED_GRADES)?,
        })
    }

    /// Reads all three collections from `dir`. Every file must be present.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            courses: read(dir, COURSES_FILE)?,
            students: read(dir, STUDENTS_FILE)?,
            grades: read(dir, GRADES_FILE)?,
        })
    }

    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let seed = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::embedded()?,
        };
        let source = dir
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "embedded".to_string());
        tracing::info!(
            courses = seed.courses.len(),
            students = seed.students.len(),
            grades = seed.grades.len(),
            source = %source,
            "loaded seed data"
        );
        Ok(seed)
    }
}

fn read<T: serde::de::DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dir.join(file);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| GradebookError::Seed(format!("cannot read {}: {}", path.display(), e)))?;
    parse(file, &content)
}

fn parse<T: serde::de::DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| GradebookError::Seed(format!("{}: {}", file, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_seed_parses() {
        let seed = SeedData::embedded().unwrap();
        assert_eq!(seed.courses.len(), 2);
        assert!(!seed.students.is_empty());
        assert!(!seed.grades.is_empty());
        assert_eq!(seed.students[0].id, 1);
    }

    #[test]
    fn test_from_dir_reads_original_field_names() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(COURSES_FILE),
            r#"[{"id": 7, "name": "History", "description": "Ancient Rome"}]"#,
        )
        .unwrap();
        std::fs::write(
            temp_dir.path().join(STUDENTS_FILE),
            r#"[{"id": 1, "name": "Marie", "lastname": "Curie", "courseID": 7}]"#,
        )
        .unwrap();
        std::fs::write(
            temp_dir.path().join(GRADES_FILE),
            r#"[{"id": 1, "courseID": 7, "studentID": 1, "grade": 95}]"#,
        )
        .unwrap();

        let seed = SeedData::load(Some(temp_dir.path())).unwrap();
        assert_eq!(seed.courses[0].name, "History");
        assert_eq!(seed.students[0].course_id, 7);
        assert_eq!(seed.grades[0].student_id, 1);
        assert_eq!(seed.grades[0].grade, 95);
    }

    #[test]
    fn test_missing_file_is_seed_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(COURSES_FILE), "[]").unwrap();

        let err = SeedData::from_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, GradebookError::Seed(_)));
        assert!(err.to_string().contains(STUDENTS_FILE));
    }

    #[test]
    fn test_malformed_file_is_seed_error() {
        let temp_dir = TempDir::new().unwrap();
        for file in [COURSES_FILE, STUDENTS_FILE, GRADES_FILE] {
            std::fs::write(temp_dir.path().join(file), "[]").unwrap();
        }
        std::fs::write(temp_dir.path().join(GRADES_FILE), r#"[{"id": "x"}]"#).unwrap();

        let err = SeedData::from_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, GradebookError::Seed(_)));
    }
}
