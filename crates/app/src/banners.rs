//! Transient notification banners fed by the session's message channel.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

pub const BANNER_DURATION: Duration = Duration::from_millis(3_000);

/// Messages waiting to be shown, one at a time, each for `BANNER_DURATION`.
pub struct BannerQueue {
    receiver: Receiver<String>,
    queued: VecDeque<String>,
    current: Option<(String, Duration)>,
}

impl BannerQueue {
    /// Returns the queue and the sender to install as the session's notification sink.
    pub fn channel() -> (Self, Sender<String>) {
        let (sender, receiver) = mpsc::channel();
        (Self { receiver, queued: VecDeque::new(), current: None }, sender)
    }

    /// Pulls new messages and ages the visible banner by `dt`.
    pub fn pump(&mut self, dt: Duration) {
        self.queued.extend(self.receiver.try_iter());

        if let Some((_, remaining)) = &mut self.current {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                self.current = None;
            }
        }
        if self.current.is_none()
            && let Some(next) = self.queued.pop_front()
        {
            self.current = Some((next, BANNER_DURATION));
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn clear(&mut self) {
        self.queued.extend(self.receiver.try_iter());
        self.queued.clear();
        self.current = None;
    }
}
