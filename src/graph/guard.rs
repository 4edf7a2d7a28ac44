//! Detection of structural changes during traversal.

use log::warn;

use crate::graph::Graph;
use crate::{Error, Result};

/// Structural version guard.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VersionGuard {
    /// Version observed when the traversal started.
    expected: u64,
    /// Whether the traversal has already reported a change.
    tripped: bool,
}

impl VersionGuard {
    /// Creates a guard for the current version of the graph.
    pub(crate) fn new<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            expected: graph.version(),
            tripped: false,
        }
    }

    /// Checks the graph version.
    ///
    /// Returns `Some(Err(_))` exactly once when a change is first detected,
    /// and `Some(Ok(()))` while the traversal may continue. Returns `None`
    /// once the traversal has been stopped by a change.
    pub(crate) fn check<G: Graph + ?Sized>(&mut self, graph: &G) -> Option<Result<()>> {
        if self.tripped {
            return None;
        }
        if graph.version() != self.expected {
            warn!(
                "graph changed during traversal (version {} -> {})",
                self.expected,
                graph.version()
            );
            self.tripped = true;
            return Some(Err(Error::ConcurrentStructuralChange));
        }
        Some(Ok(()))
    }

    /// Stops the traversal without reporting an error again.
    pub(crate) fn trip(&mut self) {
        self.tripped = true;
    }
}
