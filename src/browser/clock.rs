//! Browser clock: `Date.now()`, `Intl.DateTimeFormat`, and a one-second interval.

use gloo_timers::callback::Interval;
use js_sys::{Array, Date, Intl, Object, Reflect};
use log::{debug, warn};
use wasm_bindgen::JsValue;

use wakelock::clock::{ClockTicker, EpochMillis, LocaleFormat, TextSink, TimeSource};
use wakelock::consts::TICK_INTERVAL_MS;

/// `Date.now()`.
pub struct JsClock;

impl TimeSource for JsClock {
    fn now(&self) -> EpochMillis {
        Date::now()
    }
}

/// Time and date formatters built once from the page locale.
pub struct IntlFormat {
    time: Intl::DateTimeFormat,
    date: Intl::DateTimeFormat,
}

impl IntlFormat {
    /// Formatters for `locale`, or the platform default when `None` or unsupported.
    pub fn new(locale: Option<&str>) -> Self {
        let locales = locales(locale);
        let time = Intl::DateTimeFormat::new(
            &locales,
            &options(&[("hour", "2-digit"), ("minute", "2-digit"), ("second", "2-digit")]),
        );
        let date = Intl::DateTimeFormat::new(
            &locales,
            &options(&[("weekday", "long"), ("year", "numeric"), ("month", "long"), ("day", "numeric")]),
        );
        Self { time, date }
    }
}

impl LocaleFormat for IntlFormat {
    fn time_of_day(&self, at: EpochMillis) -> String {
        format_with(&self.time, at)
    }

    fn full_date(&self, at: EpochMillis) -> String {
        format_with(&self.date, at)
    }
}

fn locales(locale: Option<&str>) -> Array {
    let requested = Array::new();
    let Some(tag) = locale else {
        return requested;
    };
    requested.push(&JsValue::from_str(tag));
    let supported = Intl::DateTimeFormat::supported_locales_of(&requested, &Object::new());
    if supported.length() == 0 {
        warn!("locale '{tag}' not supported; using platform locale");
        return Array::new();
    }
    debug!("clock locale: {tag}");
    supported
}

fn options(pairs: &[(&str, &str)]) -> Object {
    let opts = Object::new();
    for (key, value) in pairs {
        if let Err(err) = Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_str(value)) {
            warn!("date format option {key} rejected: {err:?}");
        }
    }
    opts
}

fn format_with(formatter: &Intl::DateTimeFormat, at: EpochMillis) -> String {
    let date = Date::new(&JsValue::from_f64(at));
    match formatter.format().call1(&JsValue::UNDEFINED, &date) {
        Ok(text) => text.as_string().unwrap_or_else(|| {
            warn!("date formatter returned a non-string: {text:?}");
            String::new()
        }),
        Err(err) => {
            warn!("date formatting failed: {err:?}");
            String::new()
        }
    }
}

/// Tick once now, then every [`TICK_INTERVAL_MS`] for the page's lifetime.
pub fn start<S, F, T>(ticker: ClockTicker<S, F, T>)
where
    S: TimeSource + 'static,
    F: LocaleFormat + 'static,
    T: TextSink + 'static,
{
    ticker.tick();
    Interval::new(TICK_INTERVAL_MS, move || {
        ticker.tick();
    })
    .forget();
}
