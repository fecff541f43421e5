pub mod roster;
pub mod student_store;
