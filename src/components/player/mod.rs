use crate::components::{use_playback_controller, use_viewport_layout, Footer, InlineSvg};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::media::{AUDIO_ELEMENT_ID, VIDEO_ELEMENT_ID};
use crate::playback::ButtonVariant;
use dioxus::prelude::*;

mod controls;

use controls::PlayButton;

const IMG_BACKGROUND: &str = "/assets/025d3f657d1b686cafbb225e15715ab69088dc7a.png";
const IMG_PLAYER: &str = "/assets/87de6d9ef5fd4ae7de91878f52b70e50bb5bd108.png";
const IMG_DISK: &str = "/assets/eca046d6c044dcad9c55a1d40ba2ae8f08138e28.png";
const IMG_DISK_SHADOW: &str = "/assets/df79683ef0b2d7e4206a1e88815505d87cd2d937.svg";
const IMG_GROOVES: [&str; 3] = [
    "/assets/d563c763bf1804a8f16f527c1370abaa04e81a9c.svg",
    "/assets/83cbd9b60a15e118536062e02c77843483a53c12.svg",
    "/assets/b9597cc508bd84bfdb22d81f247e7a306d690d6f.svg",
];
const IMG_LEVER: &str = "/assets/54ba133338ae46096073b9b4b15e6f63f8f21619.png";
const IMG_TONEARM: &str = "/assets/e5da95bc0a1a0c30e02dbda9ebb206282baebe83.png";
const IMG_SHADOW: &str = "/assets/7a2cfe42e3d9d0f901132ecc6cb57279706ed2be.svg";
const IMG_HEADSHELL_SHADOW: &str = "/assets/742dedf4a9ded1b357651511c4292304f92b31ea.svg";

const APP_TITLE: &str = "Dream Vinyl";

/// Groove rings over the disk: (top, width, height, inset).
const GROOVE_LAYOUT: [(f64, f64, f64, &str); 3] = [
    (122.24, 242.0, 191.0, "-0.52% -0.41%"),
    (110.24, 272.0, 214.0, "-0.47% -0.37%"),
    (98.24, 300.0, 236.0, "-0.42% -0.33%"),
];

/// Light reflections on the disk. Each entry is the outer box style, an
/// optional inner transform with its box size, the svg inset and the source.
struct Reflection {
    outer: &'static str,
    inner: Option<(&'static str, &'static str)>,
    inset: &'static str,
    src: &'static str,
}

static REFLECTIONS: [Reflection; 7] = [
    Reflection {
        outer: "left: 712px; top: 331px; width: 149px; height: 229px;",
        inner: None,
        inset: "-17.25% -26.51% -17.25% -16.11%",
        src: "/assets/bc8315089986979c1f2682c2a1c0dde220df7461.svg",
    },
    Reflection {
        outer: "left: 561.83px; top: 393.89px; width: 329.112px; height: 192.92px;",
        inner: Some(("rotate(81.57deg)", "width: 149px; height: 310.628px;")),
        inset: "-12.72% -26.51% -12.72% -16.11%",
        src: "/assets/2fb54ec698cb94022a2faff7d892559c7031a646.svg",
    },
    Reflection {
        outer: "left: 535px; top: 309px; width: 182px; height: 280px;",
        inner: Some(("rotate(180deg) scaleY(-1)", "width: 182px; height: 280px;")),
        inset: "-2.86% -4.4% -2.86% -3.3%",
        src: "/assets/700ebfe0286b245ed606d8e263cce2f6ab36a4f0.svg",
    },
    Reflection {
        outer: "left: 535px; top: 309px; width: 182px; height: 280px;",
        inner: Some(("rotate(180deg) scaleY(-1)", "width: 182px; height: 280px;")),
        inset: "-2.86% -4.4% -2.86% -3.3%",
        src: "/assets/1bda7ba2cdaecbe5f0cb3e963f36de62ba4588a7.svg",
    },
    Reflection {
        outer: "left: 712px; top: 378px; width: 96px; height: 141px;",
        inner: None,
        inset: "-24.47% -35.94% -24.47% -25%",
        src: "/assets/704436cd0d512a2f4dc1da16cc90caeb519e310d.svg",
    },
    Reflection {
        outer: "left: 708.5px; top: 402.5px; width: 61.5px; height: 90px;",
        inner: None,
        inset: "-5.56% -8.13% -5.56% -6.5%",
        src: "/assets/58a211177a70c624939226e22607a482dcfedab8.svg",
    },
    Reflection {
        outer: "left: 655.5px; top: 402.5px; width: 61.5px; height: 90px;",
        inner: Some(("rotate(180deg) scaleY(-1)", "width: 61.5px; height: 90px;")),
        inset: "-5.56% -8.13% -5.56% -6.5%",
        src: "/assets/4cde09c0abf66731a3a0b5aedf445dc713cf1860.svg",
    },
];

/// The main record-player screen.
#[component]
pub fn VinylPlayer() -> Element {
    let controller = use_playback_controller();
    let layout = use_viewport_layout();

    let state = controller.state();
    let layout = layout();
    let title_layout = layout.title();
    let is_mobile = layout.is_mobile;

    let idle_opacity = state.idle_opacity();
    let playing_opacity = state.playing_opacity();
    let track_title = state.config().map(|config| config.title.clone());
    let idle_title_style = title_layout.style(idle_opacity);
    let track_title_style = title_layout.style(playing_opacity);

    let canvas_style = format!(
        "width: {CANVAS_WIDTH}px; height: {CANVAS_HEIGHT}px; transform: {};",
        layout.canvas_transform()
    );
    let tonearm_style = format!(
        "left: 733.44px; top: {}px; width: 230.236px; height: 284.928px; transform: rotate({}deg);",
        state.tonearm_top(),
        state.tonearm_rotation()
    );
    let disk_animation = if state.disk_spinning() {
        "diskSpin 8s linear infinite"
    } else {
        "none"
    };

    let on_primary = move |_: MouseEvent| controller.toggle_play_stop();
    let on_shuffle = move |_: MouseEvent| controller.shuffle_to_next_track();

    rsx! {
        div { class: "player-root",
            audio { id: AUDIO_ELEMENT_ID, preload: "auto" }

            img {
                class: "backdrop",
                alt: "",
                src: IMG_BACKGROUND,
            }

            video {
                id: VIDEO_ELEMENT_ID,
                class: "backdrop-video fade",
                style: "opacity: {playing_opacity};",
                muted: true,
                r#loop: true,
                playsinline: true,
            }

            div { class: "canvas", style: "{canvas_style}",
                // Blend source for the overlay layers; fades out to reveal the video.
                if !is_mobile {
                    img {
                        class: "backdrop fade",
                        alt: "",
                        style: "opacity: {idle_opacity};",
                        src: IMG_BACKGROUND,
                    }
                    p {
                        class: "app-title fade",
                        style: "top: 113px; font-size: 192px; letter-spacing: -3.84px; opacity: {idle_opacity};",
                        "{APP_TITLE}"
                    }
                }

                div {
                    class: "layer blend-soft-light",
                    style: "left: 563px; top: 350px; width: 574px; height: 296px; z-index: 15;",
                    div { class: "layer", style: "inset: -14.86% -7.67%;",
                        img { class: "fill-img", alt: "", src: IMG_SHADOW }
                    }
                }

                div {
                    class: "layer",
                    style: "left: 419px; top: 158px; width: 698px; height: 717px; z-index: 20;",
                    img { class: "cover-img", alt: "", src: IMG_PLAYER }
                }

                div {
                    class: "layer disk-frame",
                    style: "left: 446px; top: 230.76px; width: 541.089px; height: 422.745px; z-index: 25;",
                    div {
                        class: "layer blend-multiply",
                        style: "left: calc(50% + 46.46px); transform: translateX(-50%); top: 80.24px; width: 348px; height: 275px;",
                        div { class: "layer", style: "inset: -7.27% -5.75%;",
                            img { class: "fill-img", alt: "", src: IMG_DISK_SHADOW }
                        }
                    }
                    div { class: "layer disk-body",
                        div { class: "disk-projection",
                            div { class: "disk-surface",
                                div { class: "disk-glass",
                                    div {
                                        class: "disk-spin",
                                        style: "animation: {disk_animation};",
                                        img {
                                            class: "disk-img",
                                            alt: "",
                                            src: IMG_DISK,
                                        }
                                    }
                                }
                            }
                        }
                    }
                    for (index, (top, width, height, inset)) in GROOVE_LAYOUT.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "layer blend-plus-lighter",
                            style: "left: calc(50% - 3.54px); transform: translateX(-50%); top: {top}px; width: {width}px; height: {height}px;",
                            div { class: "layer", style: "inset: {inset};",
                                img {
                                    class: "fill-img",
                                    alt: "",
                                    src: IMG_GROOVES[index],
                                }
                            }
                        }
                    }
                }

                if layout.shows_blend_layers() {
                    div { class: "layer reflections",
                        for index in 0..REFLECTIONS.len() {
                            ReflectionLayer { key: "{index}", index }
                        }
                    }
                }

                div {
                    class: "layer",
                    style: "left: 868.31px; top: 300.2px; width: 104.8px; height: 99.2px; z-index: 35;",
                    div { class: "layer lever-shadow",
                        div { class: "layer clip",
                            img { class: "lever-img", alt: "", src: IMG_LEVER }
                        }
                    }
                }

                div { class: "layer tonearm", style: "{tonearm_style}",
                    div { class: "layer tonearm-box",
                        div { class: "tonearm-tilt",
                            div { class: "tonearm-body",
                                div { class: "layer clip",
                                    img {
                                        class: "tonearm-img",
                                        alt: "",
                                        src: IMG_TONEARM,
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "layer blend-soft-light",
                        style: "left: 44.56px; top: 257.75px; width: 61.5px; height: 13.5px;",
                        div { class: "layer", style: "inset: -40.31% -5.75%;",
                            img {
                                class: "fill-img",
                                alt: "",
                                src: IMG_HEADSHELL_SHADOW,
                            }
                        }
                    }
                }

                div { class: "transport",
                    PlayButton { variant: state.primary_button(), onclick: on_primary }
                    PlayButton { variant: ButtonVariant::Shuffle, onclick: on_shuffle }
                }
            }

            if is_mobile {
                p {
                    class: "screen-title fade",
                    style: "{idle_title_style}",
                    "{APP_TITLE}"
                }
            }

            if let Some(track_title) = track_title {
                p {
                    class: "screen-title fade",
                    style: "{track_title_style}",
                    "{track_title}"
                }
            }

            Footer { layout }
        }
    }
}

#[component]
fn ReflectionLayer(index: usize) -> Element {
    let Some(Reflection {
        outer,
        inner,
        inset,
        src,
    }) = REFLECTIONS.get(index)
    else {
        return rsx! {};
    };

    let svg = rsx! {
        div { class: "layer", style: "inset: {inset};",
            InlineSvg { src: src.to_string(), class: "svg-host".to_string() }
        }
    };

    match inner {
        Some((transform, size)) => rsx! {
            div { class: "layer blend-plus-lighter centered", style: "{outer}",
                div { style: "flex: none; transform: {transform};",
                    div { class: "relative", style: "{size}", {svg} }
                }
            }
        },
        None => rsx! {
            div { class: "layer blend-plus-lighter", style: "{outer}", {svg} }
        },
    }
}
