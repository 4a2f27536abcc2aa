//! Roster core library — student/course records, the registry that links
//! them, and JSON persistence.
//!
//! - [`types`] — identity newtypes and record structs
//! - [`registry`] — [`Registry`] and its operations
//! - [`store`] — document codec and file load / save
//! - [`error`] — [`RegistryError`]

pub mod error;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{EntityKind, RegistryError};
pub use registry::{EnrollOutcome, Registry};
pub use types::{Course, CourseCode, Student, StudentId};
