//! Interactive terminal front-end for the project board.
//!
//! # Responsibility
//! - Translate typed commands into form and drag gestures on the core board.
//! - Surface board state and validation alerts on stdout.
//!
//! # Invariants
//! - At most one drag gesture is in flight at a time.
//! - All state lives in the core board; the shell only parses and prints.

use log::info;
use projectboard_core::{
    default_log_level, init_logging, Board, DragTransfer, InMemorySurface, ProjectStatus,
};
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const LOG_DIR_ENV: &str = "PROJECTBOARD_LOG_DIR";
const LOG_LEVEL_ENV: &str = "PROJECTBOARD_LOG_LEVEL";

/// One in-flight drag gesture with its source position.
struct HeldDrag {
    source: ProjectStatus,
    index: usize,
    transfer: DragTransfer,
}

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Show,
    Add {
        title: String,
        description: String,
        people: String,
    },
    Submit,
    Drag {
        status: ProjectStatus,
        index: usize,
    },
    Over(ProjectStatus),
    Leave(ProjectStatus),
    Drop(ProjectStatus),
    Cancel,
    Quit,
}

/// Parse failures reported back to the user.
#[derive(Debug, PartialEq)]
enum CommandError {
    Empty,
    Unknown(String),
    Usage(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::Unknown(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::Usage(usage) => write!(f, "usage: {usage}"),
        }
    }
}

fn parse_status(value: &str, usage: &'static str) -> Result<ProjectStatus, CommandError> {
    ProjectStatus::from_slug(value).ok_or(CommandError::Usage(usage))
}

fn parse_command(line: &str) -> Result<Command, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(CommandError::Empty);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "help" => Ok(Command::Help),
        "show" | "board" => Ok(Command::Show),
        "add" => {
            const USAGE: &str = "add <title> | <description> | <people>";
            let mut parts = rest.splitn(3, '|');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(title), Some(description), Some(people)) => Ok(Command::Add {
                    title: title.trim().to_string(),
                    description: description.trim().to_string(),
                    people: people.trim().to_string(),
                }),
                _ => Err(CommandError::Usage(USAGE)),
            }
        }
        "submit" => Ok(Command::Submit),
        "drag" => {
            const USAGE: &str = "drag <active|finished> <index>";
            let mut parts = rest.split_whitespace();
            let status = parse_status(parts.next().unwrap_or(""), USAGE)?;
            let index = parts
                .next()
                .and_then(|raw| raw.parse::<usize>().ok())
                .ok_or(CommandError::Usage(USAGE))?;
            Ok(Command::Drag { status, index })
        }
        "over" => parse_status(rest, "over <active|finished>").map(Command::Over),
        "leave" => parse_status(rest, "leave <active|finished>").map(Command::Leave),
        "drop" => parse_status(rest, "drop <active|finished>").map(Command::Drop),
        "cancel" => Ok(Command::Cancel),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <title> | <description> | <people>   fill the form and submit");
    println!("  submit                                   re-submit retained field values");
    println!("  drag <active|finished> <index>           pick up a rendered item");
    println!("  over <active|finished>                   hover the drop target");
    println!("  leave <active|finished>                  leave the drop target");
    println!("  drop <active|finished>                   drop the picked-up item");
    println!("  cancel                                   discard the current drag");
    println!("  show                                     render the board");
    println!("  help                                     this text");
    println!("  quit                                     leave the shell");
}

/// Applies one command. Returns `false` when the shell should exit.
fn run_command(
    board: &mut Board<InMemorySurface>,
    held: &mut Option<HeldDrag>,
    command: Command,
) -> bool {
    match command {
        Command::Help => print_help(),
        Command::Show => print!("{}", board.render_text()),
        Command::Add {
            title,
            description,
            people,
        } => {
            board.fill_form(&title, &description, &people);
            board.submit();
        }
        Command::Submit => board.submit(),
        Command::Drag { status, index } => match board.begin_drag(status, index) {
            Some(transfer) => {
                *held = Some(HeldDrag {
                    source: status,
                    index,
                    transfer,
                });
                println!("dragging item {index} from the {} list", status.slug());
            }
            None => println!("no item at index {index} in the {} list", status.slug()),
        },
        Command::Over(status) => board.drag_over(status),
        Command::Leave(status) => board.drag_leave(status),
        Command::Drop(status) => match held.take() {
            Some(drag) => {
                board.drop_on(status, &drag.transfer);
                // The gesture ends on the source side; out-of-range after a
                // re-render is harmless.
                board.list(drag.source).end_drag(drag.index);
            }
            None => println!("nothing is being dragged; use `drag` first"),
        },
        Command::Cancel => {
            if held.take().is_some() {
                println!("drag cancelled");
            }
        }
        Command::Quit => return false,
    }
    true
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn main() {
    init_logging_from_env();
    info!("event=shell_start module=cli status=ok");
    println!(
        "projectboard {} -- type `help` for commands",
        projectboard_core::core_version()
    );

    let mut board = Board::mount(InMemorySurface::new());
    let mut held: Option<HeldDrag> = None;

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        match parse_command(&line) {
            Ok(command) => {
                if !run_command(&mut board, &mut held, command) {
                    break;
                }
            }
            Err(CommandError::Empty) => continue,
            Err(err) => println!("{err}"),
        }

        for alert in board.drain_alerts() {
            println!("alert: {alert}");
        }
    }
}
