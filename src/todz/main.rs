use clap::{CommandFactory, Parser};
use colored::*;
use todz::api::{CmdMessage, MessageLevel, TodzApi};
use todz::config::TodzConfig;
use todz::error::{Result, TodzError};
use todz::model::Todo;
use todz::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        match e {
            TodzError::Usage(_) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TodzConfig::resolve();
    let store = FileStore::new(config.data_file);
    let mut api = TodzApi::new(store);

    match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut api, text),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Done { id }) => handle_done(&mut api, &id),
        Some(Commands::Delete { id }) => handle_delete(&mut api, &id),
        Some(Commands::Clear) => handle_clear(&mut api),
        Some(Commands::Help) | None => print_usage(),
        Some(Commands::Unknown(_)) => Err(TodzError::Usage(
            "Unknown command. Use help to see available commands.".into(),
        )),
    }
}

fn handle_add(api: &mut TodzApi<FileStore>, text: Vec<String>) -> Result<()> {
    let text = text.join(" ");
    if text.is_empty() {
        return Err(TodzError::Usage("Usage: todz add <text>...".into()));
    }

    let result = api.add(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &TodzApi<FileStore>) -> Result<()> {
    let result = api.list()?;
    print_todos(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(api: &mut TodzApi<FileStore>, id: &str) -> Result<()> {
    let result = api.done(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut TodzApi<FileStore>, id: &str) -> Result<()> {
    let result = api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut TodzApi<FileStore>) -> Result<()> {
    let result = api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_usage() -> Result<()> {
    Cli::command().print_long_help()?;
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos.");
        return;
    }

    println!("{}", "Todos:".bold());
    for todo in todos {
        let mark = if todo.done {
            "x".green().to_string()
        } else {
            " ".to_string()
        };
        println!("{}. [{}] {}", todo.id, mark, todo.text);
    }

    let done_count = todos.iter().filter(|t| t.done).count();
    println!();
    println!(
        "{}",
        format!("Total: {}, Done: {}", todos.len(), done_count).dimmed()
    );
}
