//! Record types held by the [`Registry`](crate::registry::Registry).
//!
//! Students and courses never own each other. Each side refers to the other
//! by identity only (`StudentId` / `CourseCode`); the registry keeps the two
//! sides consistent.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Externally assigned, unique identifier of a student.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Externally assigned, unique code of a course.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseCode(pub String);

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for CourseCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CourseCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A student and the courses they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: u32,
    pub address: String,
    /// Enrolled course codes in enrollment order, no duplicates.
    pub courses: Vec<CourseCode>,
    /// Grades keyed by course code. Only enrolled courses may appear here.
    pub grades: BTreeMap<CourseCode, String>,
}

impl Student {
    pub fn new(id: StudentId, name: String, age: u32, address: String) -> Self {
        Self {
            id,
            name,
            age,
            address,
            courses: Vec::new(),
            grades: BTreeMap::new(),
        }
    }

    /// The one membership check every grading path goes through.
    pub fn is_enrolled_in(&self, code: &CourseCode) -> bool {
        self.courses.contains(code)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "ID: {}", self.id)?;
        if self.courses.is_empty() {
            writeln!(f, "Enrolled Courses: None")?;
        } else {
            let codes: Vec<&str> = self.courses.iter().map(|c| c.0.as_str()).collect();
            writeln!(f, "Enrolled Courses: {}", codes.join(", "))?;
        }
        if self.grades.is_empty() {
            write!(f, "Grades: None")
        } else {
            let grades: Vec<String> = self
                .grades
                .iter()
                .map(|(code, grade)| format!("{code}: {grade}"))
                .collect();
            write!(f, "Grades: {}", grades.join(", "))
        }
    }
}

/// A course and its roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    pub instructor: String,
    /// Enrolled students in enrollment order, no duplicates.
    pub roster: Vec<StudentId>,
}

impl Course {
    pub fn new(code: CourseCode, name: String, instructor: String) -> Self {
        Self {
            code,
            name,
            instructor,
            roster: Vec::new(),
        }
    }

    pub fn has_student(&self, id: &StudentId) -> bool {
        self.roster.contains(id)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Course Name: {}", self.name)?;
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Instructor: {}", self.instructor)?;
        if self.roster.is_empty() {
            write!(f, "Enrolled Students: None")
        } else {
            let ids: Vec<&str> = self.roster.iter().map(|s| s.0.as_str()).collect();
            write!(f, "Enrolled Students: {}", ids.join(", "))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
