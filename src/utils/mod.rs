pub mod colors;
pub mod date;
pub mod path;
pub mod prompt;
pub mod table;
