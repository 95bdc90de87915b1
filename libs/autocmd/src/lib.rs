//! # nvim-autocmd
//!
//! Neovim autocmd event names as constants and typed values.
//!
//! ## Design Principles
//!
//! - Every value is spelled exactly as Neovim spells the event
//! - Each literal appears once, in [`names`]; everything else refers to it
//! - Legacy aliases are defined in terms of the constant they alias
//! - The table is immutable and safe to read from any thread
//!
//! ## Usage
//!
//! Plain constants, for passing straight to an editor API:
//!
//! ```
//! use nvim_autocmd::names;
//!
//! assert_eq!(names::BUF_ENTER, "BufEnter");
//! assert_eq!(names::BUF_READ, names::BUF_READ_POST);
//! ```
//!
//! Typed events, for parsing and inspection:
//!
//! ```
//! use nvim_autocmd::{Event, EventGroup};
//!
//! let event: Event = "BufRead".parse().unwrap();
//! assert_eq!(event, Event::BufReadPost);
//! assert_eq!(event.group(), EventGroup::Buffer);
//! ```
//!
//! ## Event Groups
//!
//! - Buffer events (`Buf*`, channels, swap files)
//! - Read events (`FileRead*`, `FilterRead*`, `StdinRead*`)
//! - Write events (`FileWrite*`, `FileAppend*`, `FilterWrite*`)
//! - Option events (`FileType`, `Syntax`, `OptionSet`)
//! - Startup and exit events (`VimEnter`, `VimLeave*`, ...)
//! - Various events (windows, tabs, modes, text changes, LSP)
//! - Terminal events (`Term*`)
//! - UI events (`UIEnter`, `UILeave`)

mod alias;
mod error;
mod event;
mod macros;
pub mod names;

pub use alias::{resolve_alias, Alias, ALIASES};
pub use error::EventError;
pub use event::{Event, EventGroup};
