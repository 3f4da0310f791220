//! Core types for tallypad.
//!
//! Everything here is independent of the terminal surface so it can be
//! unit-tested without a UI:
//! - `metrics` - character/word/line counts
//! - `input` - classification of edits and the key-sound predicate
//! - `schedule` - the `schedule_after` timer primitive
//! - `notification` - transient status messages
//! - `event` - terminal event polling

pub mod event;
pub mod input;
pub mod metrics;
pub mod notification;
pub mod schedule;

pub use event::{ConfirmAction, Event, EventHandler};
pub use input::{dispatch, Action, InputEvent};
pub use metrics::Metrics;
pub use notification::{
    Notification, NotificationCenter, NotificationKind, NotificationStep, NotificationTask, Phase,
};
pub use schedule::{Clock, ManualClock, Scheduler, SystemClock};
