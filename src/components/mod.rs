//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod audio_manager;
mod footer;
mod icons;
mod inline_svg;
mod player;
mod viewport;
mod views;

pub use app::*;
pub use app_view::*;
pub use audio_manager::*;
pub use footer::*;
pub use icons::*;
pub use inline_svg::*;
pub use player::*;
pub use viewport::*;
pub use views::*;
