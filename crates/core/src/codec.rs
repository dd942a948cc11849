use thiserror::Error;

use crate::{Snapshot, SnapshotHistory};

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Malformed history data: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decode a persisted history blob into snapshots, most recent first.
///
/// An empty or whitespace only blob is the no-history case. Anything else
/// must parse as a list of line lists, e.g. `[["line1","line2"],["x"]]`.
pub fn decode(blob: &[u8]) -> Result<Vec<Snapshot>, HistoryError> {
    let blank = std::str::from_utf8(blob)
        .map(|text| text.trim().is_empty())
        .unwrap_or(false);
    if blank {
        return Ok(vec![]);
    }

    serde_json::from_slice(blob).map_err(HistoryError::Malformed)
}

/// Serialize the full snapshot list of `history`.
///
/// The navigation position is in-memory state and is not persisted.
pub fn encode(history: &SnapshotHistory) -> Result<Vec<u8>, HistoryError> {
    serde_json::to_vec(&history.snapshots).map_err(HistoryError::Encode)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_snapshot_lists() {
        let snapshots = decode(br#"[["line1","line2"], ["only line"]]"#).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].lines(), ["line1", "line2"]);
        assert_eq!(snapshots[1].lines(), ["only line"]);
    }

    #[test]
    fn decode_empty_blob_is_no_history() {
        assert!(decode(b"").unwrap().is_empty());
        assert!(decode(b" \n").unwrap().is_empty());
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_malformed_blob() {
        assert!(matches!(
            decode(b"{\"not\": \"a list\"}"),
            Err(HistoryError::Malformed(_))
        ));
        assert!(matches!(decode(b"[[\"unclosed"), Err(HistoryError::Malformed(_))));
    }

    #[test]
    fn encode_round_trips() {
        let mut history = SnapshotHistory::default();
        history.push(Snapshot::from_iter(["only line"]), 16);
        history.push(Snapshot::from_iter(["line1", "line2"]), 16);

        let blob = encode(&history).unwrap();
        let snapshots = decode(&blob).unwrap();
        assert_eq!(snapshots[0].lines(), ["line1", "line2"]);
        assert_eq!(snapshots[1].lines(), ["only line"]);
    }
}
