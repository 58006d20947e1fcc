pub mod db;
pub mod models;

pub use db::student::StudentsTable;
pub use db::table::{Table, TableError};
pub use models::Student;
