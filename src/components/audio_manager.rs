//! Audio Manager - owns playback state and the media side effects of changing it.
//! State flips synchronously on every action; fades and the delayed video pause
//! trail behind on spawned tasks.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::fade::{FadeGeneration, FadeRun, FadeSpec};
use crate::media;
use crate::playback::{
    MediaCommand, PauseTicket, PlaybackState, VideoPauseTimer, VIDEO_PAUSE_DELAY_MS,
};
use crate::tracks::tracks;

/// Handle to the player's playback state. `Copy`, so event handlers capture it
/// directly.
#[derive(Clone, Copy)]
pub struct PlaybackController {
    state: Signal<PlaybackState>,
    fades: CopyValue<FadeGeneration>,
}

impl PlaybackController {
    pub fn new(state: Signal<PlaybackState>, fades: CopyValue<FadeGeneration>) -> Self {
        Self { state, fades }
    }

    /// Current state; reading it subscribes the calling scope.
    pub fn state(&self) -> PlaybackState {
        (self.state)()
    }

    pub fn toggle_play_stop(&self) {
        let mut state = self.state;
        let command = state.write().toggle_play_stop();
        self.apply(command);
    }

    pub fn shuffle_to_next_track(&self) {
        let mut state = self.state;
        let command = state.write().shuffle_to_next_track();
        self.apply(command);
    }

    fn apply(&self, command: MediaCommand) {
        match command {
            MediaCommand::Start(track) => {
                media::start_track(tracks().get(track));
                let run = self.fades.read().begin(FadeSpec::fade_in(), media::now_ms());
                spawn(async move {
                    media::run_fade(run).await;
                });
            }
            MediaCommand::Stop => {
                let spec = FadeSpec::fade_out(media::audio_volume());
                let run = self.fades.read().begin(spec, media::now_ms());
                spawn(async move {
                    fade_out_and_rewind(run).await;
                });
            }
        }
    }

    /// Stop every running fade. Used when the player unmounts.
    /// The counter may already be gone during scope teardown; then no fade
    /// is left to stop.
    pub fn release(&self) {
        if let Ok(fades) = self.fades.try_read() {
            fades.supersede();
        }
    }
}

/// Run a stop fade and rewind the audio once it completes. A fade taken over
/// by a newer start leaves the element alone and returns false.
async fn fade_out_and_rewind(run: FadeRun) -> bool {
    let completed = media::run_fade(run).await;
    if completed {
        media::rewind_audio();
    }
    completed
}

/// Wait out the pause delay, then pause the video if `ticket` is still the
/// pending pause.
async fn pause_video_when_due(timer: Rc<RefCell<VideoPauseTimer>>, ticket: PauseTicket) -> bool {
    media::sleep_ms(VIDEO_PAUSE_DELAY_MS).await;
    let due = timer.borrow_mut().fire(ticket);
    if due {
        media::pause_video();
    }
    due
}

/// Create the player's controller and wire the delayed video pause.
pub fn use_playback_controller() -> PlaybackController {
    let state = use_signal(PlaybackState::idle);
    let fades = use_hook(|| CopyValue::new(FadeGeneration::new()));
    let controller = PlaybackController::new(state, fades);

    let pause_timer = use_hook(|| Rc::new(RefCell::new(VideoPauseTimer::default())));
    use_effect(move || {
        let current = *state.read();
        let mut timer = pause_timer.borrow_mut();
        if timer.is_pending() {
            debug!("pending video pause dropped");
        }
        if let Some(ticket) = timer.reschedule(&current) {
            debug!("video pause scheduled in {VIDEO_PAUSE_DELAY_MS}ms");
            let timer = pause_timer.clone();
            spawn(async move {
                pause_video_when_due(timer, ticket).await;
            });
        }
    });

    use_drop(move || controller.release());

    controller
}
