//! Browser media primitives for the player's audio and video elements.
//!
//! Off the web these are no-ops so the desktop build still renders.

use dioxus::logger::tracing::debug;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use dioxus::prelude::spawn;

use crate::fade::FadeRun;
#[cfg(target_arch = "wasm32")]
use crate::fade::FadeStep;
#[cfg(target_arch = "wasm32")]
use crate::error::VinylError;
use crate::tracks::TrackConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement, HtmlMediaElement, HtmlVideoElement};

pub const AUDIO_ELEMENT_ID: &str = "dream-vinyl-audio";
pub const VIDEO_ELEMENT_ID: &str = "dream-vinyl-video";

/// Look up the player's audio element, creating it if the view has not
/// rendered one.
#[cfg(target_arch = "wasm32")]
pub fn audio_element() -> Result<HtmlAudioElement, VinylError> {
    let missing = || VinylError::MissingElement(AUDIO_ELEMENT_ID);
    let document = window().and_then(|w| w.document()).ok_or_else(missing)?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().map_err(|_| missing());
    }

    let audio: HtmlAudioElement = document
        .create_element("audio")
        .ok()
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(missing)?;
    let mutation = |err: wasm_bindgen::JsValue| VinylError::DomMutation {
        id: AUDIO_ELEMENT_ID,
        reason: format!("{err:?}"),
    };
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "auto").map_err(mutation)?;
    document
        .body()
        .ok_or_else(missing)?
        .append_child(&audio)
        .map_err(mutation)?;
    Ok(audio)
}

#[cfg(target_arch = "wasm32")]
pub fn video_element() -> Result<HtmlVideoElement, VinylError> {
    let missing = || VinylError::MissingElement(VIDEO_ELEMENT_ID);
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(VIDEO_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        .ok_or_else(missing)
}

/// Start playback and discard a rejected promise (autoplay blocked, source
/// missing). Playback is best effort.
#[cfg(target_arch = "wasm32")]
fn try_play(media: &HtmlMediaElement) {
    if let Ok(promise) = media.play() {
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                debug!("play() rejected: {err:?}");
            }
        });
    }
}

/// Point the audio and video at `track`, rewind and start both. The audio
/// starts silent; the caller fades it in.
#[cfg(target_arch = "wasm32")]
pub fn start_track(track: &TrackConfig) {
    debug!("starting track {} ({})", track.id, track.title);
    match audio_element() {
        Ok(audio) => {
            audio.set_src(&track.audio_source);
            audio.set_volume(0.0);
            audio.set_current_time(0.0);
            try_play(&audio);
        }
        Err(err) => warn!("cannot start audio: {err}"),
    }
    match video_element() {
        Ok(video) => {
            video.set_src(&track.video_source);
            try_play(&video);
        }
        Err(err) => warn!("cannot start video: {err}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn start_track(track: &TrackConfig) {
    debug!("starting track {} ({})", track.id, track.title);
}

#[cfg(target_arch = "wasm32")]
pub fn audio_volume() -> f64 {
    audio_element().map(|a| a.volume()).unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn audio_volume() -> f64 {
    0.0
}

#[cfg(target_arch = "wasm32")]
fn set_audio_volume(volume: f64) {
    if let Ok(audio) = audio_element() {
        audio.set_volume(volume.clamp(0.0, 1.0));
    }
}

/// Pause the audio and rewind it to the start.
#[cfg(target_arch = "wasm32")]
pub fn rewind_audio() {
    if let Ok(audio) = audio_element() {
        let _ = audio.pause();
        audio.set_current_time(0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn rewind_audio() {}

#[cfg(target_arch = "wasm32")]
pub fn pause_video() {
    if let Ok(video) = video_element() {
        debug!("pausing background video");
        let _ = video.pause();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause_video() {
    debug!("pausing background video");
}

/// High resolution clock on the same timeline as animation-frame timestamps.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    0.0
}

#[cfg(target_arch = "wasm32")]
async fn next_animation_frame() -> Option<f64> {
    let win = window()?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = win.request_animation_frame(&resolve);
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .ok()?
        .as_f64()
}

/// Drive `run` once per animation frame. Returns `true` when the fade reached
/// its target, `false` when a newer fade took over the element.
#[cfg(target_arch = "wasm32")]
pub async fn run_fade(run: FadeRun) -> bool {
    set_audio_volume(run.spec().from);
    loop {
        let Some(now) = next_animation_frame().await else {
            return false;
        };
        match run.step(now) {
            FadeStep::Continue(volume) => set_audio_volume(volume),
            FadeStep::Finished(volume) => {
                set_audio_volume(volume);
                return true;
            }
            FadeStep::Superseded => {
                debug!("fade superseded");
                return false;
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn run_fade(run: FadeRun) -> bool {
    debug!("fade to volume {} skipped off the web", run.spec().to);
    run.is_current()
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
