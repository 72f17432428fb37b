//! Interactive console front-end for taskpad_core.
//!
//! # Responsibility
//! - Drive the menu loop: read input, call core operations, render results.
//! - Validate raw input shape (numbers, non-empty text) before handing it
//!   to the core; every business rule lives in `taskpad_core`.

use std::io::{self, BufRead, Write};
use taskpad_core::{FlatFileRepository, Task, TaskId, TaskService};

const DATA_FILE: &str = "tasks.txt";
const LOG_DIR_NAME: &str = "logs";

fn main() {
    setup_logging();

    let mut service = TaskService::new(FlatFileRepository::new(DATA_FILE));
    service.load();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = read_line(&mut input) else {
            break;
        };
        match choice.trim() {
            "1" => ui_add_task(&mut service, &mut input),
            "2" => ui_list_tasks(&service, &mut input),
            "3" => ui_mark_completed(&mut service, &mut input),
            "4" => ui_delete_task(&mut service, &mut input),
            "0" => break,
            other => println!("Invalid option `{other}`. Try again."),
        }
    }

    if service.save() {
        println!("Data saved. Goodbye!");
    } else {
        println!("Warning: your tasks could not be saved; changes from this session may be lost.");
    }
}

fn setup_logging() {
    let log_dir = match std::env::current_dir() {
        Ok(cwd) => cwd.join(LOG_DIR_NAME),
        Err(_) => return,
    };
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = taskpad_core::init_logging(taskpad_core::default_log_level(), log_dir) {
        eprintln!("logging unavailable: {err}");
    }
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        taskpad_core::core_version()
    );
}

fn print_menu() {
    println!();
    println!("--- TASK TRACKER ---");
    println!("1. Add a new task");
    println!("2. List tasks");
    println!("3. Mark a task as completed");
    println!("4. Delete a task by id");
    println!("0. Save and quit");
    prompt("Select an option: ");
}

fn prompt(text: &str) {
    print!("{text}");
    // Stdout flush failure leaves nothing sensible to do in a console app.
    let _ = io::stdout().flush();
}

/// Reads one input line. `None` means stdin is closed.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        Err(_) => None,
    }
}

/// Prompts until the user types a valid id, or `None` on closed stdin.
fn read_task_id(input: &mut impl BufRead, label: &str) -> Option<TaskId> {
    loop {
        prompt(label);
        let line = read_line(input)?;
        match line.trim().parse::<TaskId>() {
            Ok(id) => return Some(id),
            Err(_) => println!("Error: please enter a number."),
        }
    }
}

fn ui_add_task(service: &mut TaskService<FlatFileRepository>, input: &mut impl BufRead) {
    println!("\n--- Add Task ---");
    // Empty descriptions are rejected here, at the edge; the core stores
    // whatever it is handed.
    let description = loop {
        prompt("Enter the description: ");
        let Some(line) = read_line(input) else {
            return;
        };
        let trimmed = line.trim().to_string();
        if trimmed.is_empty() {
            println!("The description cannot be empty.");
        } else {
            break trimmed;
        }
    };

    let task = service.add_task(description);
    println!("Task added!");
    println!("{task}");
}

fn ui_list_tasks(service: &TaskService<FlatFileRepository>, input: &mut impl BufRead) {
    println!("\n--- List Tasks ---");
    println!("1. All tasks");
    println!("2. Pending only");
    println!("3. Completed only");
    prompt("Choose an option: ");
    let Some(choice) = read_line(input) else {
        return;
    };

    let (title, tasks) = match choice.trim() {
        "2" => (
            "--- Pending Tasks ---",
            service.list_filtered(|task| !task.is_completed()),
        ),
        "3" => (
            "--- Completed Tasks ---",
            service.list_filtered(|task| task.is_completed()),
        ),
        _ => ("--- All Tasks ---", service.list_all()),
    };

    println!("{title}");
    render_tasks(&tasks);
}

fn ui_mark_completed(service: &mut TaskService<FlatFileRepository>, input: &mut impl BufRead) {
    println!("\n--- Mark as Completed ---");
    let Some(id) = read_task_id(input, "Enter the id of the task to complete: ") else {
        return;
    };
    match service.mark_completed(id) {
        Ok(task) => {
            println!("Task updated!");
            println!("{task}");
        }
        Err(err) => println!("Error: {err}"),
    }
}

fn ui_delete_task(service: &mut TaskService<FlatFileRepository>, input: &mut impl BufRead) {
    println!("\n--- Delete Task ---");
    let Some(id) = read_task_id(input, "Enter the id of the task to delete: ") else {
        return;
    };
    match service.delete_task(id) {
        Ok(()) => println!("Task {id} deleted."),
        Err(err) => println!("Error: {err}"),
    }
}

fn render_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks to show.");
        return;
    }
    for task in tasks {
        println!("{task}");
    }
}
