use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use classroom_client::ClassroomClient;
use classroom_core::{Interaction, Outcome, ProfileManager};
use classroom_types::{Teacher, TeacherField};

use crate::cli::ProfileFields;
use crate::report;

impl ProfileFields {
    /// Fields given on the command line, in form order.
    fn provided(&self) -> Vec<(TeacherField, &str)> {
        [
            (TeacherField::Name, &self.name),
            (TeacherField::Email, &self.email),
            (TeacherField::Class, &self.class),
            (TeacherField::Attendance, &self.attendance),
            (TeacherField::Subject, &self.subject),
            (TeacherField::Salary, &self.salary),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

pub async fn list_profiles(client: &ClassroomClient, json: bool) -> Result<()> {
    let mut screen = ProfileManager::new();
    let outcome = screen.fetch_teachers(client).await;
    report(&outcome, screen.error())?;

    if json {
        println!("{}", serde_json::to_string_pretty(screen.teachers())?);
        return Ok(());
    }

    print_profiles(screen.teachers());
    Ok(())
}

pub async fn add_profile(client: &ClassroomClient, fields: ProfileFields) -> Result<()> {
    let mut screen = ProfileManager::new();
    screen.open_create_form();
    for (field, value) in fields.provided() {
        screen.set_new_field(field, value);
    }

    let outcome = screen.add_teacher(client).await;
    report(&outcome, screen.error())?;

    if let Some(created) = screen.teachers().last() {
        println!("{} {} (ID {})", "Added".green(), created.name, created.id);
    }
    Ok(())
}

pub async fn update_profile(
    client: &ClassroomClient,
    id: i64,
    fields: ProfileFields,
) -> Result<()> {
    let mut screen = ProfileManager::new();
    let outcome = screen.fetch_teachers(client).await;
    report(&outcome, screen.error())?;

    if !screen.begin_edit(id) {
        anyhow::bail!("Teacher {} not found", id);
    }
    for (field, value) in fields.provided() {
        screen.set_edit_field(field, value);
    }

    let outcome = screen.save_edit(client).await;
    report(&outcome, screen.error())?;

    let updated: Vec<Teacher> =
        screen.teachers().iter().filter(|t| t.id == id).cloned().collect();
    print_profiles(&updated);
    Ok(())
}

pub async fn delete_profile(
    client: &ClassroomClient,
    ui: &dyn Interaction,
    id: i64,
) -> Result<()> {
    let mut screen = ProfileManager::new();
    let outcome = screen.delete(id, client, ui).await;
    report(&outcome, screen.error())?;

    if outcome == Outcome::Done {
        println!("{} teacher {}", "Deleted".green(), id);
    }
    Ok(())
}

fn print_profiles(teachers: &[Teacher]) {
    if teachers.is_empty() {
        println!("{}", "No teachers found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    let mut header = vec!["ID"];
    header.extend(TeacherField::ALL.iter().map(|f| f.label()));
    table.set_header(header);

    for t in teachers {
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.name),
            Cell::new(&t.email),
            Cell::new(&t.class),
            Cell::new(&t.attendance),
            Cell::new(&t.subject),
            Cell::new(format!("{:.2}", t.salary)),
        ]);
    }
    println!("{table}");
}
