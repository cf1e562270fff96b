//! One-shot node removals keyed by wall-clock deadline.
//!
//! Entries cannot be cancelled. A removal whose node has already gone is a
//! no-op, so tearing the scene down early is harmless.

use crate::engine::{NodeId, SceneEngine};
use instant::Instant;

#[derive(Default)]
pub struct DeferredRemovals {
    pending: Vec<(Instant, NodeId)>,
}

impl DeferredRemovals {
    pub fn schedule(&mut self, at: Instant, node: NodeId) {
        self.pending.push((at, node));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove every node whose deadline is at or before `now`; returns how many fired.
    pub fn run_due<E: SceneEngine>(&mut self, now: Instant, engine: &mut E) -> usize {
        let mut fired = 0;
        self.pending.retain(|&(at, node)| {
            if at > now {
                return true;
            }
            if !engine.remove_node(node) {
                log::debug!("[burst] node {:?} already removed", node);
            }
            fired += 1;
            false
        });
        fired
    }
}
