use crate::components::Icon;
use crate::playback::ButtonVariant;
use dioxus::prelude::*;

/// Round translucent transport key under the record.
#[component]
pub(super) fn PlayButton(variant: ButtonVariant, onclick: EventHandler<MouseEvent>) -> Element {
    let (id, icon, icon_class, label) = match variant {
        ButtonVariant::Play => ("play-btn", "play", "w-[66px] h-[66px]", "Play"),
        ButtonVariant::Stop => ("stop-btn", "stop", "w-[36px] h-[36px]", "Stop"),
        ButtonVariant::Shuffle => ("shuffle-btn", "shuffle", "w-[48px] h-[48px]", "Next track"),
    };

    rsx! {
        button {
            id: "{id}",
            r#type: "button",
            class: "transport-btn",
            aria_label: "{label}",
            onclick: move |evt| onclick.call(evt),
            Icon { name: icon.to_string(), class: icon_class.to_string() }
        }
    }
}
