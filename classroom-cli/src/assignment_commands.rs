use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use classroom_client::ClassroomClient;
use classroom_core::{AssignmentManager, Interaction, Outcome};
use classroom_types::Assignment;

use crate::report;

pub async fn list_teachers(client: &ClassroomClient) -> Result<()> {
    let mut screen = AssignmentManager::new();
    let outcome = screen.fetch_teachers(client).await;
    report(&outcome, screen.error())?;

    if screen.teachers().is_empty() {
        println!("{}", "No teachers found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Teacher"]);
    for teacher in screen.teachers() {
        table.add_row(vec![Cell::new(teacher.id), Cell::new(teacher.label())]);
    }
    println!("{table}");
    Ok(())
}

pub async fn list_assignments(client: &ClassroomClient, json: bool) -> Result<()> {
    let mut screen = AssignmentManager::new();
    let outcome = screen.fetch_assignments(client).await;
    report(&outcome, screen.error())?;

    if json {
        println!("{}", serde_json::to_string_pretty(screen.assignments())?);
        return Ok(());
    }

    print_assignments(screen.assignments());
    Ok(())
}

pub async fn assign(
    client: &ClassroomClient,
    ui: &dyn Interaction,
    teacher: String,
    class: String,
) -> Result<()> {
    let mut screen = AssignmentManager::new();
    screen.select_teacher(teacher);
    screen.select_class(class);

    println!("{}", "Assigning...".cyan());
    let outcome = screen.assign(client, ui).await;
    report(&outcome, screen.error())?;

    print_assignments(screen.assignments());
    Ok(())
}

pub async fn unassign(client: &ClassroomClient, ui: &dyn Interaction, id: i64) -> Result<()> {
    let mut screen = AssignmentManager::new();
    let outcome = screen.remove_assignment(id, client, ui).await;
    report(&outcome, screen.error())?;

    if outcome == Outcome::Done {
        print_assignments(screen.assignments());
    }
    Ok(())
}

fn print_assignments(assignments: &[Assignment]) {
    if assignments.is_empty() {
        println!("{}", "No assignments found".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Teacher", "Class", "Assigned On"]);
    for row in assignments {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.teacher_name),
            Cell::new(&row.class_name).fg(Color::Cyan),
            Cell::new(row.assigned_on()),
        ]);
    }
    println!("{table}");
    println!("\n{} assignments total", assignments.len());
}
