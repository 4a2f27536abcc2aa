//! JSON persistence for the [`Registry`].
//!
//! # Document layout
//!
//! ```text
//! {
//!   "students": { "<id>":   { name, age, address, student_id, grades, courses } },
//!   "courses":  { "<code>": { course_name, course_code, instructor, students: [<id>, …] } }
//! }
//! ```
//!
//! Courses store the identities of their students, never nested records.
//! The map key is authoritative for identity on load.
//!
//! # API pattern
//!
//! - `load_at(path)` / `save_at(path, …)` take an explicit path; tests pass a `TempDir` child.
//! - [`DEFAULT_DATA_FILE`] is the fixed name the CLI uses when no path is given.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, RegistryError};
use crate::registry::Registry;
use crate::types::{Course, CourseCode, Student, StudentId};

/// File name used when the caller does not choose a location.
pub const DEFAULT_DATA_FILE: &str = "student_data.json";

// ---------------------------------------------------------------------------
// 1. Document types
// ---------------------------------------------------------------------------

/// Serialized form of a whole registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub students: BTreeMap<StudentId, StudentEntry>,
    #[serde(default)]
    pub courses: BTreeMap<CourseCode, CourseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    pub name: String,
    pub age: u32,
    pub address: String,
    pub student_id: StudentId,
    #[serde(default)]
    pub grades: BTreeMap<CourseCode, String>,
    #[serde(default)]
    pub courses: Vec<CourseCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub course_name: String,
    pub course_code: CourseCode,
    pub instructor: String,
    /// Student identities on the roster, in enrollment order.
    #[serde(default)]
    pub students: Vec<StudentId>,
}

// ---------------------------------------------------------------------------
// 2. Codec
// ---------------------------------------------------------------------------

/// Snapshot the full registry state.
pub fn serialize(registry: &Registry) -> Document {
    let students = registry
        .students()
        .map(|s| {
            let entry = StudentEntry {
                name: s.name.clone(),
                age: s.age,
                address: s.address.clone(),
                student_id: s.id.clone(),
                grades: s.grades.clone(),
                courses: s.courses.clone(),
            };
            (s.id.clone(), entry)
        })
        .collect();

    let courses = registry
        .courses()
        .map(|c| {
            let entry = CourseEntry {
                course_name: c.name.clone(),
                course_code: c.code.clone(),
                instructor: c.instructor.clone(),
                students: c.roster.clone(),
            };
            (c.code.clone(), entry)
        })
        .collect();

    Document { students, courses }
}

/// Rebuild a registry: students first, then courses re-linked by student ID.
///
/// Roster IDs with no matching student are dropped; repeated IDs collapse to one.
pub fn deserialize(document: Document) -> Registry {
    let mut registry = Registry::new();

    for (id, entry) in document.students {
        registry.insert_student(Student {
            id,
            name: entry.name,
            age: entry.age,
            address: entry.address,
            courses: entry.courses,
            grades: entry.grades,
        });
    }

    for (code, entry) in document.courses {
        let mut course = Course::new(code, entry.course_name, entry.instructor);
        for student_id in entry.students {
            if registry.student(&student_id).is_none() {
                tracing::warn!(
                    course = %course.code,
                    student = %student_id,
                    "skipping roster entry for unknown student"
                );
                continue;
            }
            if !course.has_student(&student_id) {
                course.roster.push(student_id);
            }
        }
        registry.insert_course(course);
    }

    registry
}

/// Pretty-printed JSON for the full registry.
pub fn to_json_string(registry: &Registry) -> Result<String, RegistryError> {
    Ok(serde_json::to_string_pretty(&serialize(registry))?)
}

/// Parse a JSON document into a fresh registry.
pub fn from_json_str(json: &str) -> Result<Registry, serde_json::Error> {
    serde_json::from_str::<Document>(json).map(deserialize)
}

// ---------------------------------------------------------------------------
// 3. Load
// ---------------------------------------------------------------------------

/// Load a registry from `path`.
///
/// Returns `RegistryError::IoUnavailable` if the file cannot be read (absent,
/// a directory, permission denied) and `RegistryError::Parse` (with path +
/// line context) if it is malformed. Both are recoverable.
/// The caller's current registry is never touched; swap in the result on success.
pub fn load_at(path: &Path) -> Result<Registry, RegistryError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| RegistryError::IoUnavailable {
            path: path.to_path_buf(),
            source: e,
        })?;
    let registry = from_json_str(&contents).map_err(|e| RegistryError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "registry loaded");
    Ok(registry)
}

// ---------------------------------------------------------------------------
// 4. Save (atomic)
// ---------------------------------------------------------------------------

/// Overwrite `path` with the full registry.
///
/// Write flow: serialize → `<name>.tmp` sibling → `chmod 0600` → `rename`.
/// The `.tmp` lives next to the target so the rename never crosses filesystems,
/// and is removed again if the chmod or rename fails.
pub fn save_at(path: &Path, registry: &Registry) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let json = to_json_string(registry)?;
    let tmp = tmp_path(path);
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    let installed = set_file_permissions(&tmp)
        .and_then(|()| std::fs::rename(&tmp, path).map_err(|e| io_err(path, e)));
    if let Err(err) = installed {
        let _ = std::fs::remove_file(&tmp);
        return Err(err);
    }
    tracing::info!(path = %path.display(), "registry saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), RegistryError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), RegistryError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
