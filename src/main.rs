mod api;
mod app;
mod charts;
mod message;
mod screens;
mod state;
mod theme;

use app::App;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(App::new, App::update, App::view)
        .title("SportSee")
        .theme(App::theme)
        .window_size((1280.0, 860.0))
        .run()
}
