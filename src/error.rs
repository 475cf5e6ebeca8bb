use thiserror::Error;

/// Failures surfaced by the player shell. None of these are fatal: callers log
/// them and fall back to a quiet default.
#[derive(Debug, Error)]
pub enum VinylError {
    #[error("track table is not valid JSON: {0}")]
    TrackTable(#[from] serde_json::Error),

    #[error("track table has no entry for track {0}")]
    MissingTrack(u8),

    #[error("track table lists track {0} more than once")]
    DuplicateTrack(u8),

    #[error("unknown track number {0}")]
    UnknownTrack(u8),

    #[error("element #{0} is not in the document")]
    MissingElement(&'static str),

    #[error("failed to attach #{id} to the document: {reason}")]
    DomMutation { id: &'static str, reason: String },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to parse svg from {url}")]
    SvgParse { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_failures_name_their_cause() {
        let missing = VinylError::MissingElement("dream-vinyl-video");
        assert_eq!(
            missing.to_string(),
            "element #dream-vinyl-video is not in the document"
        );

        let mutation = VinylError::DomMutation {
            id: "dream-vinyl-audio",
            reason: "HierarchyRequestError".to_string(),
        };
        assert_eq!(
            mutation.to_string(),
            "failed to attach #dream-vinyl-audio to the document: HierarchyRequestError"
        );
        assert!(!matches!(mutation, VinylError::MissingElement(_)));
    }
}
