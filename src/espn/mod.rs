pub mod client;
pub mod divisions;
pub mod status;
pub mod wire;

pub use client::{EspnClient, LeagueSchedule, ProviderError, ScheduleQuery};
pub use status::{format_live_display, normalize_status, LiveDisplay};

use async_trait::async_trait;

use crate::model::{LeagueKind, Team};

/// The seam between the aggregation layer and the upstream provider.
/// Implemented by `EspnClient` in production and by stubs in tests, which is
/// how request-scoped or fake transports get injected.
#[async_trait]
pub trait SportsDataSource: Send + Sync {
    /// One league's games, normalized. Errors here are degraded to an empty
    /// list by the caller, never surfaced to the presentation layer.
    async fn schedule(
        &self,
        league: LeagueKind,
        query: ScheduleQuery,
    ) -> Result<LeagueSchedule, ProviderError>;

    /// One league's roster with per-team statistics merged in.
    async fn roster(&self, league: LeagueKind) -> Result<Vec<Team>, ProviderError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

#[async_trait]
impl SportsDataSource for EspnClient {
    async fn schedule(
        &self,
        league: LeagueKind,
        query: ScheduleQuery,
    ) -> Result<LeagueSchedule, ProviderError> {
        self.fetch_schedule(league, query).await
    }

    async fn roster(&self, league: LeagueKind) -> Result<Vec<Team>, ProviderError> {
        self.fetch_roster(league).await
    }

    fn name(&self) -> &str {
        "ESPN"
    }
}
