//! Static per-track configuration for the three records on the player.

use std::fmt;

use dioxus::logger::tracing::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::VinylError;

/// Tonearm resting position when no record is selected.
pub const REST_TONEARM_TOP: f64 = 256.75;
pub const REST_TONEARM_ROTATION: f64 = 0.0;

const TRACKS_JSON: &str = include_str!("../assets/tracks.json");

static TRACK_TABLE: Lazy<TrackTable> = Lazy::new(|| match TrackTable::from_json(TRACKS_JSON) {
    Ok(table) => table,
    Err(err) => {
        warn!("falling back to built-in track table: {err}");
        TrackTable::builtin()
    }
});

/// One of the three configured records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TrackId {
    One,
    Two,
    Three,
}

impl TrackId {
    /// Anything outside 1..=3, negative or oversized included, is no track.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(TrackId::One),
            2 => Some(TrackId::Two),
            3 => Some(TrackId::Three),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            TrackId::One => 1,
            TrackId::Two => 2,
            TrackId::Three => 3,
        }
    }

    /// Track that follows `current` when shuffling; nothing selected counts as
    /// track zero, and track three wraps back to one.
    pub fn after(current: Option<TrackId>) -> TrackId {
        match current {
            None | Some(TrackId::Three) => TrackId::One,
            Some(TrackId::One) => TrackId::Two,
            Some(TrackId::Two) => TrackId::Three,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl TryFrom<u8> for TrackId {
    type Error = VinylError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        TrackId::from_number(i64::from(number)).ok_or(VinylError::UnknownTrack(number))
    }
}

impl From<TrackId> for u8 {
    fn from(id: TrackId) -> Self {
        id.number()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub id: TrackId,
    pub title: String,
    pub audio_source: String,
    pub video_source: String,
    /// Vertical offset of the tonearm on the design canvas.
    pub tonearm_top: f64,
    /// Tonearm angle in degrees.
    pub tonearm_rotation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackTable {
    entries: [TrackConfig; 3],
}

impl TrackTable {
    /// Parse a JSON list of track entries. Every id must appear exactly once.
    pub fn from_json(json: &str) -> Result<Self, VinylError> {
        let parsed: Vec<TrackConfig> = serde_json::from_str(json)?;
        let mut slots: [Option<TrackConfig>; 3] = [None, None, None];
        for entry in parsed {
            let slot = &mut slots[entry.id.index()];
            if slot.is_some() {
                return Err(VinylError::DuplicateTrack(entry.id.number()));
            }
            *slot = Some(entry);
        }

        let [one, two, three] = slots;
        Ok(Self {
            entries: [
                one.ok_or(VinylError::MissingTrack(1))?,
                two.ok_or(VinylError::MissingTrack(2))?,
                three.ok_or(VinylError::MissingTrack(3))?,
            ],
        })
    }

    pub fn builtin() -> Self {
        let entry = |id: TrackId, title: &str, tonearm_top: f64, tonearm_rotation: f64| {
            let n = id.number();
            TrackConfig {
                id,
                title: title.to_string(),
                audio_source: format!("/audio/track{n}.mp3"),
                video_source: format!("/video/track{n}.mp4"),
                tonearm_top,
                tonearm_rotation,
            }
        };
        Self {
            entries: [
                entry(TrackId::One, "Am I Dreaming", 256.75, 0.0),
                entry(TrackId::Two, "Space Song", 264.75, -2.61),
                entry(TrackId::Three, "Succession theme", 268.75, -7.9),
            ],
        }
    }

    pub fn get(&self, id: TrackId) -> &TrackConfig {
        &self.entries[id.index()]
    }

    /// Lookup by raw number; anything outside 1..=3 is "no selection".
    pub fn lookup(&self, number: i64) -> Option<&TrackConfig> {
        TrackId::from_number(number).map(|id| self.get(id))
    }
}

/// The track table embedded at build time.
pub fn tracks() -> &'static TrackTable {
    &TRACK_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_cycles_through_tracks() {
        assert_eq!(TrackId::after(None), TrackId::One);
        assert_eq!(TrackId::after(Some(TrackId::One)), TrackId::Two);
        assert_eq!(TrackId::after(Some(TrackId::Two)), TrackId::Three);
        assert_eq!(TrackId::after(Some(TrackId::Three)), TrackId::One);
    }

    #[test]
    fn test_from_number_rejects_unconfigured_ids() {
        assert_eq!(TrackId::from_number(0), None);
        assert_eq!(TrackId::from_number(4), None);
        assert_eq!(TrackId::from_number(2), Some(TrackId::Two));
        assert_eq!(TrackId::from_number(-1), None);
        assert_eq!(TrackId::from_number(300), None);
        assert_eq!(TrackId::from_number(i64::from(u8::MAX) + 2), None);
        assert!(matches!(
            TrackId::try_from(9),
            Err(VinylError::UnknownTrack(9))
        ));
    }

    #[test]
    fn test_embedded_table_matches_builtin() {
        let parsed = TrackTable::from_json(TRACKS_JSON).unwrap();
        assert_eq!(parsed, TrackTable::builtin());
        assert_eq!(tracks().get(TrackId::Two).title, "Space Song");
        assert_eq!(tracks().get(TrackId::Three).tonearm_rotation, -7.9);
    }

    #[test]
    fn test_lookup_unknown_number_is_no_selection() {
        assert!(tracks().lookup(0).is_none());
        assert!(tracks().lookup(7).is_none());
        assert!(tracks().lookup(-3).is_none());
        assert!(tracks().lookup(259).is_none());
        assert_eq!(tracks().lookup(1).unwrap().audio_source, "/audio/track1.mp3");
    }

    #[test]
    fn test_table_requires_every_track() {
        let json = r#"[
            {"id": 1, "title": "a", "audio_source": "a", "video_source": "a",
             "tonearm_top": 1.0, "tonearm_rotation": 0.0},
            {"id": 3, "title": "c", "audio_source": "c", "video_source": "c",
             "tonearm_top": 3.0, "tonearm_rotation": 0.0}
        ]"#;
        assert!(matches!(
            TrackTable::from_json(json),
            Err(VinylError::MissingTrack(2))
        ));
    }

    #[test]
    fn test_table_rejects_duplicates_and_bad_ids() {
        let entry = |id: u8| {
            format!(
                r#"{{"id": {id}, "title": "t", "audio_source": "a", "video_source": "v",
                    "tonearm_top": 0.0, "tonearm_rotation": 0.0}}"#
            )
        };
        let dup = format!("[{}, {}, {}]", entry(1), entry(1), entry(2));
        assert!(matches!(
            TrackTable::from_json(&dup),
            Err(VinylError::DuplicateTrack(1))
        ));

        let bad = format!("[{}]", entry(5));
        assert!(matches!(
            TrackTable::from_json(&bad),
            Err(VinylError::TrackTable(_))
        ));
    }
}
