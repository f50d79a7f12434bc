//! Command-line interface for the `skillstack` application.
//!
//! This crate's binary is a thin entry point; the command plumbing lives in
//! the library half so it can be exercised from tests.

fn main() -> anyhow::Result<()> {
    skillstack::run()
}
