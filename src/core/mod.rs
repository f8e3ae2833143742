//! # Core Session Logic
//!
//! This module contains the interactive lookup session.
//! It knows nothing about any specific UI technology or about the network.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (state)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Effect (requests)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   runner   │
//!           │  Adapter   │              │ (fetches)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Session` struct — all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`commands`]: Command classification and the immutable `SessionConfig`
//! - [`highlight`]: Keyword emphasis for example output
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod commands;
pub mod config;
pub mod highlight;
pub mod state;
