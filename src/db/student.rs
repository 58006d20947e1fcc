use super::table::{Table, TableError};
use crate::models::Student;
use chrono::NaiveDate;
use sqlx::SqliteConnection;

pub const TABLE_NAME: &str = "students";

const CREATE_TABLE: &str = "CREATE TABLE students (
    id INTEGER NOT NULL PRIMARY KEY,
    firstName CHAR(40),
    lastName CHAR(40),
    birthday DATE NULL
)";

/// Access to the `students` table over a borrowed connection.
pub struct StudentsTable<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> StudentsTable<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Students born on `date`. Empty on store failure.
    pub async fn find_by_birthday(&mut self, date: NaiveDate) -> Vec<Student> {
        tracing::debug!("Finding students born on {}", date);
        let result = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE birthday = ?")
            .bind(date)
            .fetch_all(&mut *self.conn)
            .await;

        result.unwrap_or_else(|e| {
            tracing::warn!("Failed to read students born on {}: {}", date, e);
            Vec::new()
        })
    }

    fn store_error(operation: &'static str, source: sqlx::Error) -> TableError {
        tracing::error!("{} failed on table {}: {}", operation, TABLE_NAME, source);
        TableError::Store {
            table: TABLE_NAME,
            operation,
            source,
        }
    }
}

fn is_duplicate_key(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}

impl Table<Student, i32> for StudentsTable<'_> {
    fn table_name(&self) -> &'static str {
        TABLE_NAME
    }

    async fn create_table(&mut self) -> bool {
        match sqlx::query(CREATE_TABLE).execute(&mut *self.conn).await {
            Ok(_) => {
                tracing::info!("Created table {}", TABLE_NAME);
                true
            }
            Err(e) => {
                tracing::warn!("Could not create table {}: {}", TABLE_NAME, e);
                false
            }
        }
    }

    async fn drop_table(&mut self) -> Result<bool, TableError> {
        sqlx::query("DROP TABLE students")
            .execute(&mut *self.conn)
            .await
            .map_err(|e| Self::store_error("drop_table", e))?;
        tracing::info!("Dropped table {}", TABLE_NAME);
        Ok(true)
    }

    async fn find_by_primary_key(&mut self, id: i32) -> Option<Student> {
        tracing::debug!("Finding student {}", id);
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read student {}: {}", id, e);
                None
            })
    }

    async fn find_all(&mut self) -> Vec<Student> {
        sqlx::query_as::<_, Student>("SELECT * FROM students")
            .fetch_all(&mut *self.conn)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to read students: {}", e);
                Vec::new()
            })
    }

    async fn save(&mut self, student: &Student) -> Result<bool, TableError> {
        let result = sqlx::query(
            "INSERT INTO students (id, firstName, lastName, birthday)
             VALUES (?, ?, ?, ?)",
        )
        .bind(student.id())
        .bind(student.first_name())
        .bind(student.last_name())
        .bind(student.birthday())
        .execute(&mut *self.conn)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!("Saved student {}", student.id());
                Ok(true)
            }
            Err(e) if is_duplicate_key(&e) => {
                tracing::debug!("Student {} already exists", student.id());
                Ok(false)
            }
            Err(e) => Err(Self::store_error("save", e)),
        }
    }

    async fn update(&mut self, student: &Student) -> Result<bool, TableError> {
        let result = sqlx::query(
            "UPDATE students
             SET firstName = ?, lastName = ?, birthday = ?
             WHERE id = ?",
        )
        .bind(student.first_name())
        .bind(student.last_name())
        .bind(student.birthday())
        .bind(student.id())
        .execute(&mut *self.conn)
        .await
        .map_err(|e| Self::store_error("update", e))?;

        tracing::debug!("Updated student {} ({} rows)", student.id(), result.rows_affected());
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, TableError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| Self::store_error("delete", e))?;

        tracing::debug!("Deleted student {} ({} rows)", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}
