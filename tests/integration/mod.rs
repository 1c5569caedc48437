//! Integration tests driving the preflight binary end to end

mod cli;
mod config;
mod helpers;
