//! Menu options 3 (enroll) and 4 (record grade).

use std::io::{BufRead, Write};

use anyhow::Result;

use roster_core::{CourseCode, EnrollOutcome, Registry, StudentId};

use crate::prompt::Prompt;

pub fn enroll<R: BufRead, W: Write>(
    registry: &mut Registry,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let Some(id) = prompt.ask("Enter Student ID")? else {
        return Ok(());
    };
    let Some(code) = prompt.ask("Enter Course Code")? else {
        return Ok(());
    };
    let (id, code) = (StudentId::from(id), CourseCode::from(code));

    match registry.enroll(&id, &code) {
        Ok(EnrollOutcome::Enrolled) => prompt.success(format!("{id} enrolled in {code}.")),
        Ok(EnrollOutcome::AlreadyEnrolled) => {
            prompt.notice(format!("{id} is already enrolled in {code}."))
        }
        Err(err) => prompt.failure(err),
    }
}

pub fn grade<R: BufRead, W: Write>(
    registry: &mut Registry,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let Some(id) = prompt.ask("Enter Student ID")? else {
        return Ok(());
    };
    let Some(code) = prompt.ask("Enter Course Code")? else {
        return Ok(());
    };
    let Some(grade) = prompt.ask("Enter Grade")? else {
        return Ok(());
    };
    let (id, code) = (StudentId::from(id), CourseCode::from(code));

    match registry.record_grade(&id, &code, grade.clone()) {
        Ok(None) => prompt.success(format!("Grade {grade} added for {id} in {code}.")),
        Ok(Some(previous)) => prompt.success(format!(
            "Grade {grade} added for {id} in {code} (was {previous})."
        )),
        Err(err) => prompt.failure(err),
    }
}
