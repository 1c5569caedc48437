pub mod commands;
pub mod completions;
pub mod error;
pub mod registry;
pub mod report;
pub mod utils;
pub mod validation;
pub mod verify;
