pub mod student;
pub mod views;
