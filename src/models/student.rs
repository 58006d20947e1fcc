use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// One row of the `students` table.
///
/// Values are immutable once built: updates go through the table and
/// replace the stored row, never this value.
///
/// `id` is read as an `i32`; a stored id outside that range fails to decode,
/// which empties any read that touches the row. A NULL `firstName` or
/// `lastName` reads back as an empty string, so the two are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: i32,
    #[sqlx(rename = "firstName")]
    first_name: String,
    #[sqlx(rename = "lastName")]
    last_name: String,
    birthday: Option<NaiveDate>,
}

impl Student {
    pub fn new(id: i32, first_name: String, last_name: String, birthday: Option<NaiveDate>) -> Self {
        Self {
            id,
            first_name,
            last_name,
            birthday,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id={}, firstName={}, lastName={}, birthday=",
            self.id, self.first_name, self.last_name
        )?;
        match self.birthday {
            Some(date) => write!(f, "{}}}", date),
            None => write!(f, "none}}"),
        }
    }
}
