//! Live connectivity state of the backing store.
//!
//! One `DependencyHealth` handle is shared by everything in the process.
//! Only the store connector writes it; request handling reads it before
//! touching the store so an unreachable store fails fast.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DependencyHealthState {
    Disconnected = 0,
    Connecting = 1,
    Connected = 2,
    Disconnecting = 3,
}

impl DependencyHealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnecting => "disconnecting",
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Connecting,
            2 => Self::Connected,
            3 => Self::Disconnecting,
            _ => Self::Disconnected,
        }
    }
}

impl fmt::Display for DependencyHealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct DependencyHealth {
    state: Arc<AtomicU8>,
}

impl DependencyHealth {
    /// Starts disconnected
    pub fn new() -> Self {
        Self::with_state(DependencyHealthState::Disconnected)
    }

    pub fn with_state(state: DependencyHealthState) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(state as u8)),
        }
    }

    pub fn current_state(&self) -> DependencyHealthState {
        DependencyHealthState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_connected(&self) -> bool {
        self.current_state() == DependencyHealthState::Connected
    }

    /// Record a lifecycle transition. Returns the previous state.
    pub fn transition(&self, next: DependencyHealthState) -> DependencyHealthState {
        let previous =
            DependencyHealthState::from_u8(self.state.swap(next as u8, Ordering::AcqRel));

        if previous != next {
            if previous == DependencyHealthState::Connected
                && next == DependencyHealthState::Disconnected
            {
                warn!("Store health: {} -> {} (connection lost)", previous, next);
            } else {
                info!("Store health: {} -> {}", previous, next);
            }
        }

        previous
    }
}

impl Default for DependencyHealth {
    fn default() -> Self {
        Self::new()
    }
}
