//! Swappable graph snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{LineSet, LoadError};
use crate::graph::Graph;

/// Thread-safe handle on the current routing graph.
///
/// Readers take an `Arc<Graph>` and route against it without holding the
/// lock. [`refresh`](Self::refresh) rebuilds the graph from the line file
/// and replaces it wholesale.
#[derive(Clone)]
pub struct NetworkSnapshot {
    inner: Arc<RwLock<Arc<Graph>>>,
    source: Option<PathBuf>,
}

impl NetworkSnapshot {
    /// Load lines from a JSON file and build the first graph.
    ///
    /// This will fail if the file is missing or invalid.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let graph = build_from(&path)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
            source: Some(path),
        })
    }

    /// Create a snapshot from lines already in memory.
    ///
    /// Such a snapshot has no file to refresh from.
    pub fn from_lines(lines: &LineSet) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(lines.build_graph()))),
            source: None,
        }
    }

    /// The graph current at the time of the call.
    pub async fn current(&self) -> Arc<Graph> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Replace the graph with one built from `lines`.
    pub async fn replace(&self, lines: &LineSet) -> usize {
        let graph = lines.build_graph();
        let count = graph.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(graph);

        count
    }

    /// Re-read the line file and swap in a freshly built graph.
    ///
    /// On success, returns the new node count. On failure, the existing
    /// graph is preserved and the error is returned. A snapshot built from
    /// in-memory lines is left unchanged.
    pub async fn refresh(&self) -> Result<usize, LoadError> {
        let Some(path) = &self.source else {
            debug!("Snapshot has no line file, skipping refresh");
            return Ok(self.current().await.len());
        };

        let graph = build_from(path)?;
        let count = graph.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(graph);

        info!(path = %path.display(), nodes = count, "Rebuilt station graph");
        Ok(count)
    }
}

fn build_from(path: &Path) -> Result<Graph, LoadError> {
    Ok(LineSet::from_path(path)?.build_graph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::find_path;
    use tempfile::tempdir;

    const ONE_LINE: &str = r#"[
        {"id": "Red", "stations": [
            {"name": "A", "coords": [0, 0, 0]},
            {"name": "B", "coords": [10, 0, 0]}
        ]}
    ]"#;

    const TWO_LINES: &str = r#"[
        {"id": "Red", "stations": [
            {"name": "A", "coords": [0, 0, 0]},
            {"name": "B", "coords": [10, 0, 0]}
        ]},
        {"id": "Blue", "stations": [
            {"name": "B", "coords": [10, 0, 0]},
            {"name": "C", "coords": [10, 0, 10]}
        ]}
    ]"#;

    #[tokio::test]
    async fn load_and_refresh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.json");
        std::fs::write(&path, ONE_LINE).unwrap();

        let snapshot = NetworkSnapshot::load(&path).unwrap();
        let before = snapshot.current().await;
        assert_eq!(before.len(), 2);
        assert!(!find_path(&before, "A", "C", true).is_found());

        std::fs::write(&path, TWO_LINES).unwrap();
        assert_eq!(snapshot.refresh().await.unwrap(), 4);

        let after = snapshot.current().await;
        assert_eq!(find_path(&after, "A", "C", true).transfers(), 1);

        // Earlier readers keep their snapshot
        assert_eq!(before.len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_graph() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.json");
        std::fs::write(&path, ONE_LINE).unwrap();

        let snapshot = NetworkSnapshot::load(&path).unwrap();
        std::fs::write(&path, "{ broken").unwrap();

        assert!(snapshot.refresh().await.is_err());
        assert_eq!(snapshot.current().await.len(), 2);
    }

    #[tokio::test]
    async fn replace_from_memory() {
        let snapshot = NetworkSnapshot::from_lines(&LineSet::default());
        assert!(snapshot.current().await.is_empty());

        let lines = LineSet::from_json_str(TWO_LINES).unwrap();
        assert_eq!(snapshot.replace(&lines).await, 4);
        assert_eq!(snapshot.current().await.len(), 4);

        // Nothing to re-read
        assert_eq!(snapshot.refresh().await.unwrap(), 4);
    }

    #[test]
    fn load_missing_file() {
        assert!(NetworkSnapshot::load("/nonexistent/lines.json").is_err());
    }
}
