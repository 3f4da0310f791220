//! Application-wide constants.

/// Number of log entries kept in memory
pub const MAX_LOG_ENTRIES: usize = 500;

/// Delay before a new notification becomes visible (entry transition)
pub const NOTIFICATION_ENTER_DELAY_MS: u64 = 10;

/// Time from insertion until a notification starts hiding
pub const NOTIFICATION_HOLD_MS: u64 = 2000;

/// Exit transition before a notification is removed
pub const NOTIFICATION_EXIT_MS: u64 = 300;

/// Spacing between buttons in modal dialogs
pub const MODAL_BUTTON_SPACING: u16 = 4;

/// Minimum terminal height that still shows the theme bar
pub const MIN_HEIGHT_FOR_TOOLBAR: u16 = 8;
