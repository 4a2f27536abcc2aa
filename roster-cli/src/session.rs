//! The interactive menu loop.
//!
//! A session owns the registry for the lifetime of the process. Each menu
//! selection runs exactly one command; a failed command prints its message
//! and the loop continues. Only a failed save ends the session with an error.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;

use roster_core::Registry;

use crate::commands::{course, enrollment, storage, student};
use crate::prompt::Prompt;

/// One entry of the main menu, addressed by its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddCourse,
    Enroll,
    RecordGrade,
    ShowStudent,
    ShowCourse,
    Save,
    Load,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddStudent),
            "2" => Ok(Self::AddCourse),
            "3" => Ok(Self::Enroll),
            "4" => Ok(Self::RecordGrade),
            "5" => Ok(Self::ShowStudent),
            "6" => Ok(Self::ShowCourse),
            "7" => Ok(Self::Save),
            "8" => Ok(Self::Load),
            "0" => Ok(Self::Exit),
            other => Err(format!("unknown option '{other}'; expected 0-8")),
        }
    }
}

const MENU: &[(&str, &str)] = &[
    ("1", "Add New Student"),
    ("2", "Add New Course"),
    ("3", "Enroll Student in Course"),
    ("4", "Add Grade for Student"),
    ("5", "Display Student Details"),
    ("6", "Display Course Details"),
    ("7", "Save Data to File"),
    ("8", "Load Data from File"),
    ("0", "Exit"),
];

pub struct Session {
    registry: Registry,
    data_file: PathBuf,
}

impl Session {
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            registry: Registry::new(),
            data_file,
        }
    }

    /// Run until the user picks Exit or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, prompt: &mut Prompt<R, W>) -> Result<()> {
        loop {
            print_menu(prompt)?;
            let Some(line) = prompt.ask("Select Option")? else {
                break;
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => self.dispatch(choice, prompt)?,
                Err(_) => prompt.failure("Invalid option. Please try again.")?,
            }
        }
        prompt.say("Exiting Student Management System. Goodbye!")
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        prompt: &mut Prompt<R, W>,
    ) -> Result<()> {
        tracing::debug!(?choice, "menu selection");
        match choice {
            MenuChoice::AddStudent => student::add(&mut self.registry, prompt),
            MenuChoice::AddCourse => course::add(&mut self.registry, prompt),
            MenuChoice::Enroll => enrollment::enroll(&mut self.registry, prompt),
            MenuChoice::RecordGrade => enrollment::grade(&mut self.registry, prompt),
            MenuChoice::ShowStudent => student::show(&self.registry, prompt),
            MenuChoice::ShowCourse => course::show(&self.registry, prompt),
            MenuChoice::Save => storage::save(&self.registry, &self.data_file, prompt),
            MenuChoice::Load => storage::load(&mut self.registry, &self.data_file, prompt),
            MenuChoice::Exit => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

fn print_menu<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<()> {
    prompt.say("")?;
    prompt.say("==== Student Management System ====".bold())?;
    for (key, label) in MENU {
        prompt.say(format!("{key}. {label}"))?;
    }
    Ok(())
}
