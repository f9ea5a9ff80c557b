//! Terminal host for the user management client.
//!
//! The core emits plain data (table rows, a modal description) and this
//! binary does the I/O: real HTTP through ureq, a stdin yes/no prompt for
//! delete confirmation, and stdout rendering. Two routes exist, the
//! informational home page and the CRUD page, switched by typing a
//! command or the route's path.

mod transport;

use std::io::{self, Write};

use transport::UreqTransport;
use users_core::routes::{home_page, Route};
use users_core::validate::{is_not_empty, is_valid_email};
use users_core::view::{list_view, modal_view, FieldView, ListView};
use users_core::{ConfirmDelete, CrudContainer, Transport, UserService};

/// Blocking yes/no prompt on stdin. Anything but an explicit yes declines.
struct StdinConfirm;

impl ConfirmDelete for StdinConfirm {
    fn confirm_delete(&self, id: u64) -> bool {
        print!("Are you sure you want to delete user {id}? [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Go(Route),
    List,
    Add,
    Edit(u64),
    Delete(u64),
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if let Some(route) = Route::from_path(line) {
        return Command::Go(route);
    }
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("home"), _) => Command::Go(Route::Home),
        (Some("crud"), _) | (Some("users"), _) => Command::Go(Route::Crud),
        (Some("list"), _) => Command::List,
        (Some("add"), _) => Command::Add,
        (Some("edit"), Some(id)) => match id.parse() {
            Ok(id) => Command::Edit(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        (Some("delete"), Some(id)) => match id.parse() {
            Ok(id) => Command::Delete(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        (Some("quit"), _) | (Some("q"), _) | (Some("exit"), _) => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn render_home() {
    let page = home_page();
    println!("\n{}", page.title);
    println!("{}\n", page.tagline);
    for feature in page.features {
        println!("  - {feature}");
    }
    println!("\nType 'crud' (or {}) to {}.", page.cta_path, page.cta_label.to_lowercase());
    println!("Type 'quit' to exit.");
}

fn render_list<T: Transport, C: ConfirmDelete>(container: &CrudContainer<T, C>) {
    match list_view(container.users(), container.loading()) {
        ListView::Loading => println!("\nLoading users..."),
        ListView::Table(rows) => {
            if rows.is_empty() {
                println!("\nNo users yet.");
            } else {
                println!("\n{:>4}  {:<24}  {}", "ID", "NAME", "EMAIL");
                for row in rows {
                    println!("{:>4}  {:<24}  {}", row.id, row.name, row.email);
                }
            }
        }
    }
    println!("commands: add | edit <id> | delete <id> | list | home | quit");
}

fn prompt_field(field: &FieldView) -> io::Result<Option<String>> {
    let marker = if field.required { "*" } else { "" };
    let current = if field.value.is_empty() {
        String::new()
    } else {
        format!(" [{}]", field.value)
    };
    let Some(input) = read_line(&format!("{}{marker}{current}: ", field.label))? else {
        return Ok(None);
    };
    if input == "/cancel" {
        return Ok(None);
    }
    Ok(Some(input))
}

/// Drive the modal until the draft is saved or the user cancels. A blank
/// line keeps a field's current value; `/cancel` closes the modal and
/// discards the draft. Required and email-shaped checks stand in for the
/// browser's form enforcement.
fn run_modal<T: Transport, C: ConfirmDelete>(
    container: &mut CrudContainer<T, C>,
) -> io::Result<()> {
    loop {
        let Some(view) = modal_view(
            container.modal_open(),
            container.editing_user(),
            container.form(),
            container.loading(),
        ) else {
            return Ok(());
        };

        println!("\n-- {} (blank keeps the current value, /cancel discards) --", view.title);
        for field_view in [&view.name, &view.email] {
            match prompt_field(field_view)? {
                None => {
                    container.close_modal();
                    return Ok(());
                }
                Some(input) if !input.is_empty() => {
                    container.update_form(field_view.field, &input);
                }
                Some(_) => {}
            }
        }

        let form = container.form();
        if !is_not_empty(&form.name) || !is_not_empty(&form.email) {
            println!("Name and email are required.");
            continue;
        }
        let email = form.email.clone();
        if !is_valid_email(&email) {
            println!("'{email}' does not look like an email address.");
            continue;
        }

        container.submit();
        if container.modal_open() {
            println!("Save failed; your input was kept. Try again or /cancel.");
            continue;
        }
        println!("Saved.");
        return Ok(());
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    tracing::info!("using API at {base_url}");

    let service = UserService::new(&base_url, UreqTransport::new());
    let mut container = CrudContainer::new(service, StdinConfirm);
    let mut route = Route::Home;

    render_home();
    loop {
        let Some(line) = read_line("> ")? else {
            break;
        };
        match parse_command(&line) {
            Command::Quit => break,
            Command::Go(Route::Home) => {
                route = Route::Home;
                render_home();
            }
            Command::Go(Route::Crud) => {
                route = Route::Crud;
                container.refresh();
                render_list(&container);
            }
            Command::List if route == Route::Crud => {
                container.refresh();
                render_list(&container);
            }
            Command::Add if route == Route::Crud => {
                container.open_create_modal();
                run_modal(&mut container)?;
                render_list(&container);
            }
            Command::Edit(id) if route == Route::Crud => {
                match container.users().iter().find(|u| u.id == id).cloned() {
                    Some(user) => {
                        container.open_edit_modal(user);
                        run_modal(&mut container)?;
                        render_list(&container);
                    }
                    None => println!("no user with id {id}"),
                }
            }
            Command::Delete(id) if route == Route::Crud => {
                container.delete(id);
                render_list(&container);
            }
            Command::Unknown(cmd) if cmd.is_empty() => {}
            Command::Unknown(cmd) => println!("unknown command: {cmd}"),
            _ => println!("that command only works on {}", Route::Crud.path()),
        }
    }
    Ok(())
}
