//! Play/stop/track-selection state and the values derived from it.

use crate::tracks::{tracks, TrackConfig, TrackId, REST_TONEARM_ROTATION, REST_TONEARM_TOP};

/// Delay before the background video is paused once playback stops, so the
/// opacity transition can finish first.
pub const VIDEO_PAUSE_DELAY_MS: u32 = 1000;

/// Only reachable through its transitions, so a track is always selected
/// while playing and never while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackState {
    playing: bool,
    current_track: Option<TrackId>,
}

/// Media work the controller has to carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// Load the track, start it silent and fade it in. Starts the video too.
    Start(TrackId),
    /// Fade the audio out, then pause and rewind it.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Play,
    Stop,
    Shuffle,
}

impl PlaybackState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn current_track(&self) -> Option<TrackId> {
        self.current_track
    }

    /// Play/stop button. State flips immediately; the audio catches up as the
    /// returned command runs.
    pub fn toggle_play_stop(&mut self) -> MediaCommand {
        if self.playing {
            *self = Self::idle();
            MediaCommand::Stop
        } else {
            self.select(TrackId::One)
        }
    }

    pub fn shuffle_to_next_track(&mut self) -> MediaCommand {
        self.select(TrackId::after(self.current_track))
    }

    fn select(&mut self, track: TrackId) -> MediaCommand {
        self.playing = true;
        self.current_track = Some(track);
        MediaCommand::Start(track)
    }

    /// True while the background video should wind down.
    pub fn video_should_pause(&self) -> bool {
        self.current_track.is_none() || !self.playing
    }

    pub fn config(&self) -> Option<&'static TrackConfig> {
        self.current_track.map(|id| tracks().get(id))
    }

    pub fn tonearm_top(&self) -> f64 {
        self.config().map_or(REST_TONEARM_TOP, |c| c.tonearm_top)
    }

    pub fn tonearm_rotation(&self) -> f64 {
        self.config()
            .map_or(REST_TONEARM_ROTATION, |c| c.tonearm_rotation)
    }

    /// Opacity of the video and of the current track title.
    pub fn playing_opacity(&self) -> f64 {
        if self.playing {
            1.0
        } else {
            0.0
        }
    }

    /// Opacity of the idle background and the "Dream Vinyl" title.
    pub fn idle_opacity(&self) -> f64 {
        1.0 - self.playing_opacity()
    }

    pub fn disk_spinning(&self) -> bool {
        self.playing
    }

    pub fn primary_button(&self) -> ButtonVariant {
        if self.playing {
            ButtonVariant::Stop
        } else {
            ButtonVariant::Play
        }
    }
}

/// Identifies one scheduled video pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseTicket(u64);

/// Bookkeeping for the delayed video pause. At most one pause is pending, and
/// every re-evaluation drops it, so a pause scheduled before a quick
/// stop/play never fires.
#[derive(Debug, Default)]
pub struct VideoPauseTimer {
    issued: u64,
    pending: Option<PauseTicket>,
}

impl VideoPauseTimer {
    /// Drop any pending pause and schedule a new one if `state` calls for it.
    /// The caller waits [`VIDEO_PAUSE_DELAY_MS`] and then calls [`Self::fire`].
    pub fn reschedule(&mut self, state: &PlaybackState) -> Option<PauseTicket> {
        self.pending = None;
        if !state.video_should_pause() {
            return None;
        }
        self.issued = self.issued.wrapping_add(1);
        let ticket = PauseTicket(self.issued);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// True if `ticket` is still the pending pause; it is consumed either way.
    pub fn fire(&mut self, ticket: PauseTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_idle_starts_first_track() {
        let mut state = PlaybackState::idle();
        assert_eq!(state.toggle_play_stop(), MediaCommand::Start(TrackId::One));
        assert!(state.playing());
        assert_eq!(state.current_track(), Some(TrackId::One));
    }

    #[test]
    fn test_toggle_twice_returns_to_idle() {
        let mut state = PlaybackState::idle();
        state.toggle_play_stop();
        assert_eq!(state.toggle_play_stop(), MediaCommand::Stop);
        assert_eq!(state, PlaybackState::idle());
        assert!(!state.playing());
        assert!(state.current_track().is_none());
    }

    #[test]
    fn test_toggle_stops_any_track() {
        let mut state = PlaybackState::idle();
        state.shuffle_to_next_track();
        state.shuffle_to_next_track();
        assert_eq!(state.current_track(), Some(TrackId::Two));
        assert_eq!(state.toggle_play_stop(), MediaCommand::Stop);
        assert_eq!(state, PlaybackState::idle());
    }

    #[test]
    fn test_shuffle_walks_and_wraps() {
        let mut state = PlaybackState::idle();
        let expected = [
            TrackId::One,
            TrackId::Two,
            TrackId::Three,
            TrackId::One,
        ];
        for track in expected {
            assert_eq!(state.shuffle_to_next_track(), MediaCommand::Start(track));
            assert!(state.playing());
            assert_eq!(state.current_track(), Some(track));
        }
    }

    #[test]
    fn test_idle_invariant_holds_through_transitions() {
        let mut state = PlaybackState::idle();
        let actions: [fn(&mut PlaybackState) -> MediaCommand; 5] = [
            PlaybackState::toggle_play_stop,
            PlaybackState::shuffle_to_next_track,
            PlaybackState::toggle_play_stop,
            PlaybackState::toggle_play_stop,
            PlaybackState::shuffle_to_next_track,
        ];
        for action in actions {
            action(&mut state);
            assert_eq!(state.playing(), state.current_track().is_some());
        }
    }

    #[test]
    fn test_video_pause_condition() {
        let mut state = PlaybackState::idle();
        assert!(state.video_should_pause());
        state.toggle_play_stop();
        assert!(!state.video_should_pause());
        state.toggle_play_stop();
        assert!(state.video_should_pause());
    }

    #[test]
    fn test_derived_values_follow_track() {
        let mut state = PlaybackState::idle();
        assert_eq!(state.tonearm_top(), REST_TONEARM_TOP);
        assert_eq!(state.tonearm_rotation(), REST_TONEARM_ROTATION);
        assert_eq!(state.idle_opacity(), 1.0);
        assert_eq!(state.primary_button(), ButtonVariant::Play);
        assert!(state.config().is_none());

        state.shuffle_to_next_track();
        state.shuffle_to_next_track();
        state.shuffle_to_next_track();
        assert_eq!(state.tonearm_top(), 268.75);
        assert_eq!(state.tonearm_rotation(), -7.9);
        assert_eq!(state.config().unwrap().title, "Succession theme");
        assert_eq!(state.playing_opacity(), 1.0);
        assert_eq!(state.idle_opacity(), 0.0);
        assert!(state.disk_spinning());
        assert_eq!(state.primary_button(), ButtonVariant::Stop);
    }

    #[test]
    fn test_video_pause_fires_when_left_alone() {
        let mut timer = VideoPauseTimer::default();
        let mut state = PlaybackState::idle();
        state.toggle_play_stop();
        assert_eq!(timer.reschedule(&state), None);
        assert!(!timer.is_pending());

        state.toggle_play_stop();
        let ticket = timer.reschedule(&state).unwrap();
        assert!(timer.is_pending());
        assert!(timer.fire(ticket));
        assert!(!timer.is_pending());
        assert!(!timer.fire(ticket));
    }

    #[test]
    fn test_video_pause_cancelled_by_quick_replay() {
        let mut timer = VideoPauseTimer::default();
        let mut state = PlaybackState::idle();
        state.toggle_play_stop();
        state.toggle_play_stop();
        let stale = timer.reschedule(&state).unwrap();

        state.toggle_play_stop();
        assert_eq!(timer.reschedule(&state), None);
        assert!(!timer.fire(stale));
    }

    #[test]
    fn test_video_pause_only_latest_ticket_fires() {
        let mut timer = VideoPauseTimer::default();
        let state = PlaybackState::idle();
        let first = timer.reschedule(&state).unwrap();
        let second = timer.reschedule(&state).unwrap();
        assert_ne!(first, second);
        assert!(!timer.fire(first));
        assert!(timer.fire(second));
    }
}
