use crate::components::Icon;
use crate::media::sleep_ms;
use crate::tracks::TrackId;
use dioxus::prelude::*;

/// Delay before the disk starts spinning, so it mounts on a defined first frame.
pub const SPIN_START_DELAY_MS: u32 = 100;

/// Display name for a track number; unknown numbers have none.
pub fn track_label(number: i64) -> Option<String> {
    TrackId::from_number(number).map(|id| format!("Track {id}"))
}

/// Wait out the mount delay, then run `start` once.
async fn start_spin_after_delay(start: impl FnOnce()) {
    sleep_ms(SPIN_START_DELAY_MS).await;
    start();
}

/// Spinning flag for the secondary view: false on mount, true shortly after.
/// The timer task belongs to the calling scope and dies with it.
pub fn use_spin_start() -> Signal<bool> {
    let spinning = use_signal(|| false);
    use_hook(move || {
        let mut spinning = spinning;
        spawn(start_spin_after_delay(move || spinning.set(true)))
    });
    spinning
}

/// Single-record close-up. Navigation is left to the owner: both buttons only
/// relay the click.
#[component]
pub fn TrackView(
    track_number: i64,
    disk_image: String,
    on_change_track: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let spinning = use_spin_start();
    let label = track_label(track_number);
    let disk_class = if spinning() {
        "track-disk spinning"
    } else {
        "track-disk"
    };

    rsx! {
        div { class: "track-view",
            button {
                r#type: "button",
                class: "back-btn",
                onclick: move |_| on_back.call(()),
                Icon { name: "back".to_string(), class: "w-6 h-6".to_string() }
                "Back"
            }

            if let Some(label) = label {
                p { class: "track-name", "{label}" }
            }

            div { class: "track-stage",
                div { class: "track-base" }
                div { class: "{disk_class}",
                    img { alt: "Vinyl disk", src: "{disk_image}" }
                }
            }

            button {
                r#type: "button",
                class: "change-track-btn",
                onclick: move |_| on_change_track.call(()),
                "Change track"
            }
        }
    }
}
