mod student;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::SqliteConnection;
use studentdb::db::parse_date;
use studentdb::Student;

#[derive(Debug, PartialEq)]
pub enum Command {
    Create,
    Drop,
    List,
    Get(i32),
    Add(Student),
    Update(Student),
    Delete(i32),
    Birthday(NaiveDate),
    Help,
}

/// Parse the command line (without the program name) into a `Command`.
pub fn parse_command(args: &[String]) -> Result<Command> {
    let (subcommand, rest) = match args.split_first() {
        Some((first, rest)) => (first.as_str(), rest),
        None => ("", args),
    };

    let command = match subcommand {
        "create" => Command::Create,
        "drop" => Command::Drop,
        "list" | "ls" => Command::List,
        "get" => Command::Get(parse_id(rest)?),
        "add" => Command::Add(parse_student(rest)?),
        "update" => Command::Update(parse_student(rest)?),
        "delete" | "rm" => Command::Delete(parse_id(rest)?),
        "birthday" => {
            let text = rest.first().context("Usage: birthday <YYYY-MM-DD>")?;
            Command::Birthday(parse_date(text).with_context(|| format!("Invalid date: `{}`", text))?)
        }
        "" | "help" => Command::Help,
        _ => anyhow::bail!("Unknown command: `{}`. Run `studentdb help` for available commands.", subcommand),
    };

    Ok(command)
}

fn parse_id(args: &[String]) -> Result<i32> {
    let text = args.first().context("Missing student id")?;
    text.parse::<i32>()
        .with_context(|| format!("Invalid student id: `{}`", text))
}

fn parse_student(args: &[String]) -> Result<Student> {
    if args.len() < 3 {
        anyhow::bail!("Usage: <id> <first name> <last name> [YYYY-MM-DD]");
    }

    let id = parse_id(args)?;
    let birthday = match args.get(3) {
        Some(text) => Some(parse_date(text).with_context(|| format!("Invalid date: `{}`", text))?),
        None => None,
    };

    Ok(Student::new(id, args[1].clone(), args[2].clone(), birthday))
}

/// Run one command against the caller's connection.
pub async fn run(conn: &mut SqliteConnection, command: Command) -> Result<()> {
    tracing::debug!("Running command: {:?}", command);

    match command {
        Command::Create => student::handle_create(conn).await,
        Command::Drop => student::handle_drop(conn).await,
        Command::List => student::handle_list(conn).await,
        Command::Get(id) => student::handle_get(conn, id).await,
        Command::Add(student) => student::handle_add(conn, &student).await,
        Command::Update(student) => student::handle_update(conn, &student).await,
        Command::Delete(id) => student::handle_delete(conn, id).await,
        Command::Birthday(date) => student::handle_birthday(conn, date).await,
        Command::Help => run_help(),
    }
}

pub fn run_help() -> Result<()> {
    println!("{}", HELP_TEXT);
    Ok(())
}

const HELP_TEXT: &str = r#"studentdb - manage the students table

Commands:
  create                                   Create the students table
  drop                                     Drop the students table
  list | ls                                Print every student as JSON
  get <id>                                 Print one student
  add <id> <first> <last> [YYYY-MM-DD]     Insert a student
  update <id> <first> <last> [YYYY-MM-DD]  Rewrite a student's names and birthday
  delete | rm <id>                         Remove a student
  birthday <YYYY-MM-DD>                    Print students born on a date
  help                                     Show this help message

The database is read from DATABASE_URL (default: sqlite://students.db)."#;
