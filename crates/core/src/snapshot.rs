use serde::{Deserialize, Serialize};

/// Exact scratch buffer content at save time.
///
/// An ordered list of lines, empty lines included. Never mutated after
/// creation, a new save always produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    lines: Vec<String>,
}

impl Snapshot {
    pub fn new(lines: Vec<String>) -> Snapshot {
        Snapshot { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether this content counts as empty: no lines at all, or a single
    /// empty line. Two lines are content even if both are empty.
    pub fn is_blank(&self) -> bool {
        match self.lines.as_slice() {
            [] => true,
            [line] => line.is_empty(),
            _ => false,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Snapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Snapshot {
        Snapshot::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blankness() {
        assert!(Snapshot::new(vec![]).is_blank());
        assert!(Snapshot::from_iter([""]).is_blank());

        assert!(!Snapshot::from_iter(["a"]).is_blank());
        assert!(!Snapshot::from_iter(["", ""]).is_blank());
        assert!(!Snapshot::from_iter(["", "b"]).is_blank());
    }
}
