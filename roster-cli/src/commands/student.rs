//! Menu options 1 (add student) and 5 (display student).

use std::io::{BufRead, Write};

use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{Registry, Student, StudentId};

use crate::prompt::Prompt;

#[derive(Tabled)]
struct EnrollmentRow {
    #[tabled(rename = "code")]
    code: String,
    #[tabled(rename = "course")]
    course: String,
    #[tabled(rename = "instructor")]
    instructor: String,
    #[tabled(rename = "grade")]
    grade: String,
}

pub fn add<R: BufRead, W: Write>(registry: &mut Registry, prompt: &mut Prompt<R, W>) -> Result<()> {
    let Some(name) = prompt.ask("Enter Name")? else {
        return Ok(());
    };
    let Some(age) = prompt.ask("Enter Age")? else {
        return Ok(());
    };
    let Ok(age) = age.trim().parse::<u32>() else {
        return prompt.failure(format!("'{age}' is not a valid age; expected a whole number."));
    };
    let Some(address) = prompt.ask("Enter Address")? else {
        return Ok(());
    };
    let Some(id) = prompt.ask("Enter Student ID")? else {
        return Ok(());
    };

    match registry.add_student(name, age, address, StudentId::from(id)) {
        Ok(student) => {
            let msg = format!("Student {} (ID: {}) added successfully.", student.name, student.id);
            prompt.success(msg)
        }
        Err(err) => prompt.failure(err),
    }
}

pub fn show<R: BufRead, W: Write>(registry: &Registry, prompt: &mut Prompt<R, W>) -> Result<()> {
    let Some(id) = prompt.ask("Enter Student ID")? else {
        return Ok(());
    };
    let Some(student) = registry.student(&StudentId::from(id)) else {
        return prompt.failure("Student not found.");
    };

    prompt.say(student)?;
    if !student.courses.is_empty() {
        prompt.say(enrollment_table(registry, student))?;
    }
    Ok(())
}

fn enrollment_table(registry: &Registry, student: &Student) -> Table {
    let rows: Vec<EnrollmentRow> = student
        .courses
        .iter()
        .map(|code| {
            let course = registry.course(code);
            EnrollmentRow {
                code: code.to_string(),
                course: course.map(|c| c.name.clone()).unwrap_or_else(|| "?".to_string()),
                instructor: course
                    .map(|c| c.instructor.clone())
                    .unwrap_or_else(|| "?".to_string()),
                grade: student.grades.get(code).cloned().unwrap_or_else(|| "-".to_string()),
            }
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}
