//! CLI argument parsing tests.

mod config;
mod density;
