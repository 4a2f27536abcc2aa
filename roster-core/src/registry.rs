//! In-memory registry of students and courses.
//!
//! The registry owns both keyed collections and is the only place that
//! mutates the links between them:
//!
//! - a course code is in a student's `courses` iff that student is on the
//!   course's `roster`;
//! - a grade for `(student, course)` exists only while the student is
//!   enrolled in that course.
//!
//! Failed operations leave the registry untouched.

use std::collections::BTreeMap;

use crate::error::{EntityKind, RegistryError};
use crate::types::{Course, CourseCode, Student, StudentId};

/// Result of [`Registry::enroll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    /// The link was created (or a half-present link was completed).
    Enrolled,
    /// Both sides already held the link; nothing changed.
    AlreadyEnrolled,
}

/// Owner of every student and course record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    students: BTreeMap<StudentId, Student>,
    courses: BTreeMap<CourseCode, Course>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Creation
    // -----------------------------------------------------------------------

    /// Register a new student with no courses and no grades.
    ///
    /// Returns `RegistryError::DuplicateKey` if `id` is taken; the existing
    /// record is left as it was.
    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        age: u32,
        address: impl Into<String>,
        id: StudentId,
    ) -> Result<&Student, RegistryError> {
        if self.students.contains_key(&id) {
            return Err(RegistryError::DuplicateKey {
                kind: EntityKind::Student,
                key: id.0,
            });
        }
        tracing::debug!(student = %id, "student added");
        let student = Student::new(id.clone(), name.into(), age, address.into());
        let stored: &Student = self.students.entry(id).or_insert(student);
        Ok(stored)
    }

    /// Register a new course with an empty roster.
    pub fn add_course(
        &mut self,
        name: impl Into<String>,
        code: CourseCode,
        instructor: impl Into<String>,
    ) -> Result<&Course, RegistryError> {
        if self.courses.contains_key(&code) {
            return Err(RegistryError::DuplicateKey {
                kind: EntityKind::Course,
                key: code.0,
            });
        }
        tracing::debug!(course = %code, "course added");
        let course = Course::new(code.clone(), name.into(), instructor.into());
        let stored: &Course = self.courses.entry(code).or_insert(course);
        Ok(stored)
    }

    // -----------------------------------------------------------------------
    // Relationships
    // -----------------------------------------------------------------------

    /// Enroll a student in a course, updating both sides in one step.
    ///
    /// Both keys are resolved before anything is written, so a `NotFound`
    /// never leaves a half-made link behind.
    pub fn enroll(
        &mut self,
        student_id: &StudentId,
        code: &CourseCode,
    ) -> Result<EnrollOutcome, RegistryError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| not_found(EntityKind::Student, &student_id.0))?;
        let course = self
            .courses
            .get_mut(code)
            .ok_or_else(|| not_found(EntityKind::Course, &code.0))?;

        let on_student = student.is_enrolled_in(code);
        let on_course = course.has_student(student_id);
        if on_student && on_course {
            return Ok(EnrollOutcome::AlreadyEnrolled);
        }

        if !on_student {
            student.courses.push(code.clone());
        }
        if !on_course {
            course.roster.push(student_id.clone());
        }
        tracing::debug!(student = %student_id, course = %code, "student enrolled");
        Ok(EnrollOutcome::Enrolled)
    }

    /// Record (or overwrite) a student's grade for an enrolled course.
    ///
    /// Returns the grade that was replaced, if any.
    pub fn record_grade(
        &mut self,
        student_id: &StudentId,
        code: &CourseCode,
        grade: impl Into<String>,
    ) -> Result<Option<String>, RegistryError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| not_found(EntityKind::Student, &student_id.0))?;
        if !student.is_enrolled_in(code) {
            return Err(RegistryError::NotEnrolled {
                student: student_id.0.clone(),
                course: code.0.clone(),
            });
        }
        let previous = student.grades.insert(code.clone(), grade.into());
        tracing::debug!(student = %student_id, course = %code, "grade recorded");
        Ok(previous)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn course(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.get(code)
    }

    /// All students, ordered by ID.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// All courses, ordered by code.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.courses.is_empty()
    }

    // -----------------------------------------------------------------------
    // Reconstruction (store only)
    // -----------------------------------------------------------------------

    /// Insert a fully-formed student, replacing any record with the same ID.
    pub(crate) fn insert_student(&mut self, student: Student) {
        self.students.insert(student.id.clone(), student);
    }

    /// Insert a fully-formed course, replacing any record with the same code.
    pub(crate) fn insert_course(&mut self, course: Course) {
        self.courses.insert(course.code.clone(), course);
    }
}

fn not_found(kind: EntityKind, key: &str) -> RegistryError {
    RegistryError::NotFound {
        kind,
        key: key.to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
