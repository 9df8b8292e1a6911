//! Swipecard - a deck of swipeable user profile cards
//! Built with iced; cards spring in, tilt while dragged and fly off when swiped

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Settings are read before the window opens so its size can follow them
    let (settings, settings_error) = features::Settings::load();
    let window_size = iced::Size::new(settings.window.width, settings.window.height);

    iced::application(
        move || app::App::new(settings.clone(), settings_error.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(window_size)
    .antialiasing(true)
    .run()
}
