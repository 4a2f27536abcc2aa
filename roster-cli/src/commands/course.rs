//! Menu options 2 (add course) and 6 (display course).

use std::io::{BufRead, Write};

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{Course, CourseCode, Registry};

use crate::prompt::Prompt;

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "student id")]
    id: String,
    #[tabled(rename = "name")]
    name: String,
}

pub fn add<R: BufRead, W: Write>(registry: &mut Registry, prompt: &mut Prompt<R, W>) -> Result<()> {
    let Some(name) = prompt.ask("Enter Course Name")? else {
        return Ok(());
    };
    let Some(code) = prompt.ask("Enter Course Code")? else {
        return Ok(());
    };
    let Some(instructor) = prompt.ask("Enter Instructor Name")? else {
        return Ok(());
    };

    match registry.add_course(name, CourseCode::from(code), instructor) {
        Ok(course) => {
            let msg = format!(
                "Course {} (Code: {}) created with instructor {}.",
                course.name, course.code, course.instructor
            );
            prompt.success(msg)
        }
        Err(err) => prompt.failure(err),
    }
}

pub fn show<R: BufRead, W: Write>(registry: &Registry, prompt: &mut Prompt<R, W>) -> Result<()> {
    let Some(code) = prompt.ask("Enter Course Code")? else {
        return Ok(());
    };
    let Some(course) = registry.course(&CourseCode::from(code)) else {
        return prompt.failure("Course not found.");
    };

    prompt.say(course)?;
    if !course.roster.is_empty() {
        prompt.say(roster_table(registry, course))?;
    }
    Ok(())
}

fn roster_table(registry: &Registry, course: &Course) -> Table {
    let rows: Vec<RosterRow> = course
        .roster
        .iter()
        .map(|id| RosterRow {
            id: id.to_string(),
            name: registry
                .student(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "?".to_string()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}
