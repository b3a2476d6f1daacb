// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-width cache of comparator networks.

use crate::network::{batcher_odd_even, ComparatorNetwork};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::trace;

/// Cache of comparator networks keyed by width.
///
/// Reads take a shared lock; a miss builds the network outside the lock
/// and keeps whichever copy was inserted first, so concurrent callers
/// always observe the same `Arc`.
#[derive(Debug, Default)]
pub struct NetworkMemo {
    networks: RwLock<HashMap<usize, Arc<ComparatorNetwork>>>,
}

impl NetworkMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the network for `width`, building it on first use.
    ///
    /// # Panics
    ///
    /// Panics if `width` is odd or below 2.
    pub fn get(&self, width: usize) -> Arc<ComparatorNetwork> {
        if let Some(net) = self.read().get(&width) {
            trace!(width, "network cache hit");
            return Arc::clone(net);
        }

        let built = Arc::new(batcher_odd_even(width));
        let mut networks = self
            .networks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(networks.entry(width).or_insert(built))
    }

    /// Number of widths built so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<usize, Arc<ComparatorNetwork>>> {
        // The map is only ever extended with complete entries, so a
        // poisoned lock still guards consistent data.
        self.networks
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Process-wide network cache.
static GLOBAL: OnceLock<NetworkMemo> = OnceLock::new();

/// Get the shared network for `width` from the process-wide cache.
pub fn network_for_width(width: usize) -> Arc<ComparatorNetwork> {
    GLOBAL.get_or_init(NetworkMemo::new).get(width)
}
