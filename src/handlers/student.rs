use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::SqliteConnection;
use studentdb::{Student, StudentsTable, Table};

fn print_students(students: &[Student]) -> Result<()> {
    for student in students {
        let line = serde_json::to_string(student).context("Failed to serialize student")?;
        println!("{}", line);
    }
    Ok(())
}

pub async fn handle_create(conn: &mut SqliteConnection) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    if table.create_table().await {
        println!("Created table `{}`", table.table_name());
    } else {
        println!("Table `{}` was not created (it may already exist)", table.table_name());
    }
    Ok(())
}

pub async fn handle_drop(conn: &mut SqliteConnection) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    table.drop_table().await.context("Failed to drop table")?;
    println!("Dropped table `{}`", table.table_name());
    Ok(())
}

pub async fn handle_list(conn: &mut SqliteConnection) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    let students = table.find_all().await;
    tracing::info!("Found {} student(s)", students.len());
    print_students(&students)
}

pub async fn handle_get(conn: &mut SqliteConnection, id: i32) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    match table.find_by_primary_key(id).await {
        Some(student) => print_students(&[student]),
        None => {
            println!("No student with id {}", id);
            Ok(())
        }
    }
}

pub async fn handle_add(conn: &mut SqliteConnection, student: &Student) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    if table.save(student).await.context("Failed to save student")? {
        println!("Saved {}", student);
    } else {
        println!("A student with id {} already exists", student.id());
    }
    Ok(())
}

pub async fn handle_update(conn: &mut SqliteConnection, student: &Student) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    if table.update(student).await.context("Failed to update student")? {
        println!("Updated {}", student);
    } else {
        println!("No student with id {}", student.id());
    }
    Ok(())
}

pub async fn handle_delete(conn: &mut SqliteConnection, id: i32) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    if table.delete(id).await.context("Failed to delete student")? {
        println!("Deleted student {}", id);
    } else {
        println!("No student with id {}", id);
    }
    Ok(())
}

pub async fn handle_birthday(conn: &mut SqliteConnection, date: NaiveDate) -> Result<()> {
    let mut table = StudentsTable::new(conn);
    let students = table.find_by_birthday(date).await;
    tracing::info!("Found {} student(s) born on {}", students.len(), date);
    print_students(&students)
}
