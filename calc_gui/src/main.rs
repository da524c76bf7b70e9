//! # Multicalc GUI Application
//!
//! Tabbed desktop calculator built on Iced: a basic keypad with history,
//! construction estimate, loan and currency finance, calorie targets and a
//! unit converter. Runs natively and in the browser (WASM).

mod app;
mod ui;

pub use app::{App, Message};

use calc_core::Settings;

fn main() -> iced::Result {
    init_logging();

    let (settings, status) = match Settings::discover() {
        Ok(settings) => (settings, None),
        Err(e) => {
            tracing::warn!(error = %e, "settings rejected, using defaults");
            (Settings::default(), Some(format!("Settings ignored: {}", e)))
        }
    };

    iced::application(
        move || App::new(settings.clone()).with_status(status.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window_size((1100.0, 720.0))
    .run()
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    console_error_panic_hook::set_once();
}
