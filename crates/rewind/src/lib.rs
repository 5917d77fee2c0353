//! Rewind terminal driver.
//!
//! A line-oriented front end for [`rewind_tictactoe`]: it parses commands,
//! calls into the game and renders the read model as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;

pub mod command;
pub mod render;

pub use command::{Command, CommandError};
pub use config::{ConfigError, RewindConfig};
pub use session::{Flow, Session};
