//! Wall clock, quick presets and the once-per-second refresh timer

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use super::format::format_local;
use crate::utils::Timezone;

pub(crate) trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn now_seconds(&self) -> i64 {
        self.now().timestamp()
    }
}

pub(crate) struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Offsets relative to the current wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Preset {
    #[value(name = "1h-ago")]
    HourAgo,
    #[value(name = "1d-ago")]
    DayAgo,
    #[value(name = "1w-ago")]
    WeekAgo,
    #[value(name = "1h-later")]
    HourLater,
    #[value(name = "1d-later")]
    DayLater,
    #[value(name = "1w-later")]
    WeekLater,
}

impl Preset {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Preset::HourAgo => "1 hour ago",
            Preset::DayAgo => "1 day ago",
            Preset::WeekAgo => "1 week ago",
            Preset::HourLater => "1 hour later",
            Preset::DayLater => "1 day later",
            Preset::WeekLater => "1 week later",
        }
    }

    pub(crate) fn offset_seconds(self) -> i64 {
        match self {
            Preset::HourAgo => -3_600,
            Preset::DayAgo => -86_400,
            Preset::WeekAgo => -604_800,
            Preset::HourLater => 3_600,
            Preset::DayLater => 86_400,
            Preset::WeekLater => 604_800,
        }
    }

    /// Epoch seconds for this preset, measured from `clock`
    pub(crate) fn apply(self, clock: &dyn Clock) -> i64 {
        clock.now_seconds() + self.offset_seconds()
    }
}

/// The "current time" panel contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CurrentTime {
    pub(crate) unix: i64,
    pub(crate) human: String,
}

impl CurrentTime {
    pub(crate) fn read(clock: &dyn Clock, zone: Timezone) -> Self {
        let now = clock.now();
        CurrentTime {
            unix: now.timestamp(),
            human: format_local(now, zone),
        }
    }
}

/// Emits one tick per period until dropped.
///
/// Ticks are delivered over a channel so the owner handles them on its own
/// thread, one at a time. Dropping the timer stops and joins the ticker.
pub(crate) struct RefreshTimer {
    ticks: Receiver<()>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTimer {
    pub(crate) fn start(period: Duration) -> Self {
        let (tick_tx, ticks) = mpsc::channel();
        let (stop, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tick_tx.send(()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        debug!(?period, "refresh timer armed");
        RefreshTimer {
            ticks,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Block until the next tick. Returns false once the ticker has stopped.
    pub(crate) fn wait(&self) -> bool {
        self.ticks.recv().is_ok()
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        debug!("refresh timer disarmed");
    }
}

#[cfg(test)]
pub(crate) struct FixedClock(pub(crate) i64);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0, 0).unwrap_or_default()
    }
}
