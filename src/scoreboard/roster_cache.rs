//! In-memory roster cache.
//!
//! Team metadata changes far less often than live scores, so rosters are held
//! in a single process-wide slot for a bounded freshness window and refreshed
//! wholesale. On a failed refetch the stale slot is preferred over an empty
//! result. Concurrent refreshes during the same stale window are a benign
//! race: the write is a full replace, so the worst case is redundant work.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{LeagueKind, Team};

/// The four league rosters, indexed by `LeagueKind::index()`.
pub type Rosters = [Vec<Team>; 4];

/// Time source, injectable so tests can drive expiry deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Slot {
    rosters: Rosters,
    fetched_at: Instant,
}

/// Thread-safe single-slot roster cache with a fixed freshness window.
#[derive(Clone)]
pub struct RosterCache {
    inner: Arc<RwLock<Option<Slot>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl RosterCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        RosterCache {
            inner: Arc::new(RwLock::new(None)),
            ttl,
            clock,
        }
    }

    /// One league's cached teams with their age, regardless of freshness.
    pub async fn get(&self, league: LeagueKind) -> Option<(Vec<Team>, Duration)> {
        let inner = self.inner.read().await;
        let slot = inner.as_ref()?;
        let age = self.clock.now().saturating_duration_since(slot.fetched_at);
        Some((slot.rosters[league.index()].clone(), age))
    }

    /// All four rosters, only while younger than the freshness window.
    pub async fn fresh(&self) -> Option<Rosters> {
        let inner = self.inner.read().await;
        let slot = inner.as_ref()?;
        let age = self.clock.now().saturating_duration_since(slot.fetched_at);
        if age < self.ttl {
            Some(slot.rosters.clone())
        } else {
            None
        }
    }

    /// All four rosters at any age — the fallback when a refetch fails.
    pub async fn any(&self) -> Option<Rosters> {
        let inner = self.inner.read().await;
        inner.as_ref().map(|slot| slot.rosters.clone())
    }

    /// Replace the slot wholesale and restamp it.
    pub async fn replace(&self, rosters: Rosters) {
        let mut inner = self.inner.write().await;
        *inner = Some(Slot {
            rosters,
            fetched_at: self.clock.now(),
        });
        debug!("roster cache replaced");
    }

    /// Replace one league's roster, restamping the slot. Creates the slot if
    /// none exists yet.
    pub async fn refresh(&self, league: LeagueKind, teams: Vec<Team>) {
        let mut inner = self.inner.write().await;
        let now = self.clock.now();
        match inner.as_mut() {
            Some(slot) => {
                slot.rosters[league.index()] = teams;
                slot.fetched_at = now;
            }
            None => {
                let mut rosters = Rosters::default();
                rosters[league.index()] = teams;
                *inner = Some(Slot { rosters, fetched_at: now });
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Controllable clock for cache expiry tests.
    pub struct ManualClock {
        now: Mutex<Instant>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            ManualClock { now: Mutex::new(Instant::now()) }
        }

        pub fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }
    }
}
