use std::cell::{Cell, RefCell};

use super::*;
use crate::consts::TICK_INTERVAL_MS;

// =============================================================
// Helpers
// =============================================================

/// Clock that advances by one second on every read.
struct SteppingClock {
    now: Cell<EpochMillis>,
}

impl TimeSource for SteppingClock {
    fn now(&self) -> EpochMillis {
        let at = self.now.get();
        self.now.set(at + f64::from(TICK_INTERVAL_MS));
        at
    }
}

/// Formats seconds-since-epoch; stands in for a locale.
struct SecondsFormat;

impl LocaleFormat for SecondsFormat {
    fn time_of_day(&self, at: EpochMillis) -> String {
        format!("{}s", at / 1000.0)
    }

    fn full_date(&self, _at: EpochMillis) -> String {
        "Thursday, January 1, 1970".to_owned()
    }
}

fn ticker(start: EpochMillis) -> (ClockTicker<SteppingClock, SecondsFormat, impl Fn(&str)>, std::rc::Rc<RefCell<Vec<String>>>) {
    let written = std::rc::Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let written = written.clone();
        move |text: &str| written.borrow_mut().push(text.to_owned())
    };
    (ClockTicker::new(SteppingClock { now: Cell::new(start) }, SecondsFormat, sink), written)
}

// =============================================================
// Tests
// =============================================================

#[test]
fn sample_displays_on_two_lines() {
    let sample = ClockSample { time: "09:05:01".into(), date: "Friday, October 16, 2026".into() };
    assert_eq!(sample.to_string(), "Current Time: 09:05:01\nDate: Friday, October 16, 2026");
}

#[test]
fn tick_writes_formatted_sample_to_sink() {
    let (ticker, written) = ticker(0.0);
    let sample = ticker.tick();
    assert_eq!(sample.time, "0s");
    assert_eq!(*written.borrow(), vec!["Current Time: 0s\nDate: Thursday, January 1, 1970".to_owned()]);
}

#[test]
fn every_tick_reflects_a_new_reading() {
    let (ticker, written) = ticker(5000.0);
    ticker.tick();
    ticker.tick();
    ticker.tick();
    let written = written.borrow();
    assert_eq!(written.len(), 3);
    assert!(written[0].starts_with("Current Time: 5s"));
    assert!(written[1].starts_with("Current Time: 6s"));
    assert!(written[2].starts_with("Current Time: 7s"));
}

#[test]
fn tick_interval_is_one_second() {
    assert_eq!(TICK_INTERVAL_MS, 1000);
}
