//! The components module contains all shared components for the site.

mod app;
mod app_view;
mod footer;
mod icons;
mod loading;
mod player;
mod playlist_form;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use footer::*;
pub use icons::*;
pub use loading::*;
pub use player::*;
pub use playlist_form::*;
