pub mod student;
pub mod table;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Open a single connection to the database at `database_url`, creating the
/// file if it does not exist yet. The caller owns the returned connection.
pub async fn connect(database_url: &str) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .connect()
        .await
}

/// Parse a `YYYY-MM-DD` date as stored in the `birthday` column.
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
}
