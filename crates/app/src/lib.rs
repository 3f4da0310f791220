//! Application orchestrator for tallypad.
//!
//! This crate provides:
//! - `EditorSession` - the document, preferences and every user action
//! - `App` - the event loop driving a session
//! - `TextArea` - document text with a cursor
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        tallypad (bin)                           │
//! │  main.rs - terminal setup, services, rendering                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   tallypad-app (this crate)                     │
//! │  App (event loop) → EditorSession (state + handlers)            │
//! └─────────────────────────────────────────────────────────────────┘
//!        │            │            │            │            │
//!        ▼            ▼            ▼            ▼            ▼
//!   ┌────────┐  ┌──────────┐  ┌─────────┐  ┌────────┐  ┌─────────┐
//!   │  core  │  │ keyboard │  │  modal  │  │ sound  │  │clipboard│
//!   └────────┘  └──────────┘  └─────────┘  └────────┘  └─────────┘
//! ```

pub mod app;
pub mod session;
pub mod text_area;

pub use app::App;
pub use session::{CounterLabels, EditorSession, Preferences, ThemeChoice};
pub use text_area::{TextArea, WrappedText};
