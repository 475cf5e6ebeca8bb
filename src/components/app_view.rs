//! Defines the application routes.

use dioxus::prelude::*;

use crate::components::{Home, TrackDetail};
use crate::tracks::{tracks, TrackId};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[route("/")]
    Home {},
    // Wide enough that any integer routes; unconfigured ids render as no selection.
    #[route("/track/:number")]
    TrackDetail { number: i64 },
}

impl AppView {
    /// Route of the record after `number`, wrapping from the last back to the first.
    pub fn next_track(number: i64) -> AppView {
        let next = TrackId::after(TrackId::from_number(number));
        AppView::TrackDetail {
            number: i64::from(next.number()),
        }
    }
}

pub fn view_label(view: &AppView) -> String {
    match view {
        AppView::Home {} => "Dream Vinyl".to_string(),
        AppView::TrackDetail { number } => match tracks().lookup(*number) {
            Some(track) => format!("{} · Dream Vinyl", track.title),
            None => "Dream Vinyl".to_string(),
        },
    }
}
