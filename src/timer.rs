use crate::logger;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Periodic tick source for the quiz countdown.
///
/// Ticks are delivered over a channel so they land on the same event loop
/// as key input. The background task is aborted by [`CountdownTimer::cancel`]
/// and when the timer is dropped.
#[derive(Debug)]
pub struct CountdownTimer {
    handle: Option<JoinHandle<()>>,
}

impl CountdownTimer {
    pub fn start(period: Duration) -> (Self, mpsc::Receiver<Tick>) {
        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick).await.is_err() {
                    break;
                }
            }
        });
        logger::log("Countdown started");
        (
            Self {
                handle: Some(handle),
            },
            rx,
        )
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            logger::log("Countdown cancelled");
        }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
