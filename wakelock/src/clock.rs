//! Local clock display.
//!
//! The ticker itself knows nothing about scheduling; the host calls
//! [`ClockTicker::tick`] once at startup and then every
//! [`TICK_INTERVAL_MS`](crate::consts::TICK_INTERVAL_MS).

use std::fmt;

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch, as `Date.now()` reports them.
pub type EpochMillis = f64;

/// Source of the current instant.
pub trait TimeSource {
    fn now(&self) -> EpochMillis;
}

/// Locale-aware formatting of an instant.
pub trait LocaleFormat {
    /// Hour, minute and second.
    fn time_of_day(&self, at: EpochMillis) -> String;
    /// Weekday, year, month and day.
    fn full_date(&self, at: EpochMillis) -> String;
}

/// Destination for the rendered clock text.
pub trait TextSink {
    fn set_text(&self, text: &str);
}

impl<F: Fn(&str)> TextSink for F {
    fn set_text(&self, text: &str) {
        self(text);
    }
}

/// One formatted reading of the clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockSample {
    pub time: String,
    pub date: String,
}

impl fmt::Display for ClockSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current Time: {}\nDate: {}", self.time, self.date)
    }
}

/// Reads the clock, formats it, and writes it to the time region.
pub struct ClockTicker<S, F, T> {
    source: S,
    format: F,
    sink: T,
}

impl<S: TimeSource, F: LocaleFormat, T: TextSink> ClockTicker<S, F, T> {
    #[must_use]
    pub fn new(source: S, format: F, sink: T) -> Self {
        Self { source, format, sink }
    }

    /// Take one sample and display it.
    pub fn tick(&self) -> ClockSample {
        let now = self.source.now();
        let sample = ClockSample { time: self.format.time_of_day(now), date: self.format.full_date(now) };
        self.sink.set_text(&sample.to_string());
        sample
    }
}
