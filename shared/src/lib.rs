pub mod constants;
pub mod display;
pub mod error;
pub mod forms;
pub mod routes;
pub mod theme;
pub mod types;
pub mod utils;
pub mod validate;
