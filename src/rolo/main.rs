use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rolo::api::RoloApi;
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::store::fs::FileBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
mod print;

use args::Cli;
use print::{print_messages, print_page_header, print_records};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = match &cli.book {
        Some(path) => path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => ProjectDirs::from("com", "rolo", "rolo")
            .ok_or_else(|| RoloError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    let config = RoloConfig::load(&data_dir)?;

    let book_path = cli
        .book
        .clone()
        .unwrap_or_else(|| data_dir.join(&config.book_file));
    let page_size = cli.page_size.unwrap_or(config.page_size).max(1);

    let mut api = RoloApi::open(FileBackend::new(book_path))?;

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.map_err(RoloError::Io)?;
        match dispatch(&mut api, page_size, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            // Per-command errors become display strings here; only
            // storage failures end the session (the store's Drop still
            // flushes on this path).
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => println!("{}", e.to_string().red()),
        }
        prompt()?;
    }

    api.close()
}

enum Flow {
    Continue,
    Quit,
}

fn prompt() -> Result<()> {
    print!("Command: ");
    io::stdout().flush().map_err(RoloError::Io)?;
    Ok(())
}

/// Tokenize one input line and route it. Wrong argument counts get usage
/// strings, never errors; `good bye`, `close` and `exit` end the loop.
fn dispatch<B: rolo::store::StorageBackend>(
    api: &mut RoloApi<B>,
    page_size: usize,
    line: &str,
) -> Result<Flow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (command, args) = match tokens.as_slice() {
        [] => return Ok(Flow::Continue),
        [first, second, rest @ ..]
            if matches!(
                (first.to_lowercase().as_str(), second.to_lowercase().as_str()),
                ("show", "all") | ("good", "bye")
            ) =>
        {
            (format!("{} {}", first, second).to_lowercase(), rest)
        }
        [first, rest @ ..] => (first.to_lowercase(), rest),
    };

    match (command.as_str(), args) {
        ("hello", _) => println!("How can I help you?"),
        ("good bye" | "close" | "exit", _) => {
            println!("Good bye!");
            return Ok(Flow::Quit);
        }
        ("add", [name, phone]) => print_messages(&api.add(name, phone)?.messages),
        ("add", _) => println!("Give me name and phone please!"),
        ("change", [name, old, new]) => {
            print_messages(&api.change(name, old, new)?.messages)
        }
        ("change", _) => println!("Give me name, old phone and new phone please!"),
        ("find", [fragment]) => {
            let result = api.find(fragment)?;
            print_messages(&result.messages);
            print_records(result.listed.iter().map(|(n, r)| (n.as_str(), r)));
        }
        ("find", _) => {
            println!("Please enter a fragment of the name or phone number to search!")
        }
        ("show all", _) => show_all(api, page_size)?,
        ("birthday", [name]) => print_messages(&api.birthday(name, None)?.messages),
        ("birthday", [name, date]) => {
            print_messages(&api.birthday(name, Some(*date))?.messages)
        }
        ("birthday", _) => println!("Give me a contact name please!"),
        ("remove", [name]) => print_messages(&api.remove(name, None)?.messages),
        ("remove", [name, phone]) => print_messages(&api.remove(name, Some(*phone))?.messages),
        ("remove", _) => println!("Give me a contact name and optionally a phone please!"),
        _ => println!("Command entered incorrectly!"),
    }
    Ok(Flow::Continue)
}

fn show_all<B: rolo::store::StorageBackend>(api: &RoloApi<B>, page_size: usize) -> Result<()> {
    let pages = api.show_all(page_size)?;
    let total = pages.page_count();
    if total == 0 {
        println!("Phone numbers do not exist yet!");
        return Ok(());
    }

    println!("Contacts book:");
    for (i, page) in pages.enumerate() {
        print_page_header(i + 1, total);
        print_records(page.iter().map(|(n, r)| (n.as_str(), r)));
    }
    Ok(())
}
