mod app;
mod icons;
mod navigation;
mod routers;
mod settings;
mod style;
mod theme;
mod widgets;

use clap::Parser;
use env_logger::Env;
use iced::{Size, window};

use crate::app::{App, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::settings::{AppSettings, LaunchOptions};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = LaunchOptions::parse();
    let settings = match AppSettings::from_options(options) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("failed to load settings, using defaults: {err}");
            AppSettings::default()
        },
    };

    iced::application(
        move || App::new(settings.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .window(window::Settings {
        min_size: Some(Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        }),
        ..window::Settings::default()
    })
    .resizable(true)
    .subscription(App::subscription)
    .run()
}
