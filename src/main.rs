//! Trunk entry point: `trunk serve --features csr`.

#[cfg(feature = "csr")]
fn main() {
    use keepawake::app::App;
    use keepawake::config::AppConfig;
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let search = web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default();
    let (config, config_error) = match AppConfig::from_query(&search) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = console_log::init_with_level(config.log_level) {
        leptos::logging::error!("logger init failed: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("ignoring page config: {err}");
    }
    log::debug!("config: {config:?}");

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("keepawake runs in the browser; build it with `trunk serve --features csr`");
}
