//! Carousel - browse a deck of images one slide at a time
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use clap::Parser;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let args = app::Args::parse();

    iced::application(
        move || app::App::new(args.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .window_size(iced::Size::new(1024.0, 768.0))
    .antialiasing(true)
    .run()
}
