//! # Module: TUI Dashboard
//!
//! ## Responsibility
//! Terminal front end of the dashboard using Ratatui: filter selectors, the
//! face card, the mascot, the eight chart panels, and an event log. Every
//! key press goes through the [`Synchronizer`](crate::sync::Synchronizer)
//! and the next frame draws whatever artifacts it holds.
//!
//! ## Guarantees
//! - No panics in any rendering or update path
//! - Clean terminal restore on exit, including on panic
//! - Graceful resize handling down to 100x40 minimum
//!
//! ## NOT Responsible For
//! - Computing chart contents (see `charts`)
//! - Loading configuration or data (see `config`, `dataset`)

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;
