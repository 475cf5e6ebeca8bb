use crate::components::{view_label, AppView, TrackView, VinylPlayer};
use dioxus::prelude::*;

const TRACK_DISK_IMAGE: &str = "/assets/e6fd18211623371d4adb853844b707e55d5d8b65.svg";

#[component]
pub fn Home() -> Element {
    let title = view_label(&AppView::Home {});
    rsx! {
        document::Title { "{title}" }
        VinylPlayer {}
    }
}

/// Secondary record view. The route decides what "back" and "change track"
/// mean; the view itself only reports the clicks.
#[component]
pub fn TrackDetail(number: i64) -> Element {
    let navigator = navigator();
    let title = view_label(&AppView::TrackDetail { number });

    rsx! {
        document::Title { "{title}" }
        TrackView {
            track_number: number,
            disk_image: TRACK_DISK_IMAGE.to_string(),
            on_change_track: move |_| {
                let _ = navigator.replace(AppView::next_track(number));
            },
            on_back: move |_| navigator.go_back(),
        }
    }
}
