//! Transient status messages.
//!
//! Each notification runs its own timeline, independent of any other:
//! inserted hidden, shown after the entry delay, hidden once the hold time
//! (counted from insertion) is over, removed when the exit transition has
//! finished.

use std::time::Duration;

use tallypad_config::constants::{
    NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS, NOTIFICATION_HOLD_MS,
};

use crate::schedule::Scheduler;

pub type NotificationId = u64;

/// Visual phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted, not yet shown
    Entering,
    /// Fully shown
    Visible,
    /// Fading out, about to be removed
    Leaving,
}

/// What a notification reports; picks its color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
}

/// Lifecycle step applied when its timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStep {
    Show,
    Hide,
    Remove,
}

/// Timer payload for one step of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTask {
    pub id: NotificationId,
    pub step: NotificationStep,
}

/// All live notifications, oldest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification and schedule its whole lifecycle.
    pub fn notify<T: From<NotificationTask>>(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        scheduler: &mut Scheduler<T>,
    ) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            phase: Phase::Entering,
        });

        let enter = Duration::from_millis(NOTIFICATION_ENTER_DELAY_MS);
        let hide = Duration::from_millis(NOTIFICATION_HOLD_MS);
        let remove = hide + Duration::from_millis(NOTIFICATION_EXIT_MS);
        for (delay, step) in [
            (enter, NotificationStep::Show),
            (hide, NotificationStep::Hide),
            (remove, NotificationStep::Remove),
        ] {
            scheduler.schedule_after(delay, NotificationTask { id, step }.into());
        }

        id
    }

    /// Apply a fired timer. Returns `true` if anything changed.
    pub fn apply(&mut self, task: NotificationTask) -> bool {
        let Some(pos) = self.items.iter().position(|n| n.id == task.id) else {
            return false;
        };

        match task.step {
            NotificationStep::Show => self.items[pos].phase = Phase::Visible,
            NotificationStep::Hide => self.items[pos].phase = Phase::Leaving,
            NotificationStep::Remove => {
                self.items.remove(pos);
            }
        }
        true
    }

    /// Notifications that should be drawn (visible or leaving).
    pub fn displayed(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|n| n.phase != Phase::Entering)
    }

    /// Every live notification, including ones not shown yet.
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualClock;

    fn run_due(center: &mut NotificationCenter, scheduler: &mut Scheduler<NotificationTask>) {
        for task in scheduler.take_due() {
            center.apply(task);
        }
    }

    #[test]
    fn test_three_phase_lifecycle() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());
        let mut center = NotificationCenter::new();

        center.notify("✓ Text kopierad!", NotificationKind::Success, &mut scheduler);
        assert_eq!(center.all()[0].phase, Phase::Entering);
        assert_eq!(center.displayed().count(), 0);

        clock.advance(Duration::from_millis(10));
        run_due(&mut center, &mut scheduler);
        assert_eq!(center.all()[0].phase, Phase::Visible);
        assert_eq!(center.all()[0].message, "✓ Text kopierad!");
        assert_eq!(center.all()[0].kind, NotificationKind::Success);

        clock.advance(Duration::from_millis(1989));
        run_due(&mut center, &mut scheduler);
        assert_eq!(center.all()[0].phase, Phase::Visible);

        clock.advance(Duration::from_millis(1));
        run_due(&mut center, &mut scheduler);
        assert_eq!(center.all()[0].phase, Phase::Leaving);
        assert_eq!(center.displayed().count(), 1);

        clock.advance(Duration::from_millis(300));
        run_due(&mut center, &mut scheduler);
        assert!(center.is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_overlapping_notifications_are_independent() {
        let clock = ManualClock::new();
        let mut scheduler = Scheduler::new(clock.clone());
        let mut center = NotificationCenter::new();

        let first = center.notify("one", NotificationKind::Info, &mut scheduler);
        clock.advance(Duration::from_millis(1000));
        let second = center.notify("one", NotificationKind::Info, &mut scheduler);
        assert_ne!(first, second);
        assert_eq!(center.all().len(), 2);

        // First one is gone, second still visible
        clock.advance(Duration::from_millis(1300));
        run_due(&mut center, &mut scheduler);
        assert_eq!(center.all().len(), 1);
        assert_eq!(center.all()[0].id, second);
        assert_eq!(center.all()[0].phase, Phase::Visible);
    }

    #[test]
    fn test_apply_unknown_id_is_ignored() {
        let mut center = NotificationCenter::new();
        assert!(!center.apply(NotificationTask {
            id: 42,
            step: NotificationStep::Remove,
        }));
    }
}
