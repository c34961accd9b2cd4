//! # Customer Desk Console
//!
//! The interactive side of the application: prompts that keep asking until
//! the answer is valid, the numbered menu that dispatches to a
//! `CustomerStore`, and the table rendering for read results.
//!
//! Everything is generic over `BufRead` / `Write` so the whole menu can be
//! driven from a script in tests.

pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;

pub use error::ConsoleError;
pub use menu::{Menu, MenuState};
pub use prompt::Prompter;
