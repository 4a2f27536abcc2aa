//! One module per menu area. Every command prompts for its own parameters,
//! calls a single registry or store operation, and prints the outcome.

pub mod course;
pub mod enrollment;
pub mod storage;
pub mod student;
