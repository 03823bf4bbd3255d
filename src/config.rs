use clap::Parser;

/// Multi-league live scoreboard aggregation service
#[derive(Parser, Debug, Clone)]
#[command(name = "scorehub", version, about)]
pub struct Config {
    /// HTTP listen address
    #[arg(long, env = "SCOREHUB_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: String,

    /// Sports data API base URL
    #[arg(
        long,
        env = "SPORTS_API_URL",
        default_value = "https://site.api.espn.com/apis/site/v2/sports"
    )]
    pub sports_api_url: String,

    /// Favorites database path
    #[arg(long, env = "FAVORITES_PATH", default_value = "scorehub.db")]
    pub favorites_path: String,

    /// Timeout per upstream HTTP request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Deadline for one whole aggregate fetch, in seconds
    #[arg(long, env = "AGGREGATE_TIMEOUT_SECS", default_value = "25")]
    pub aggregate_timeout_secs: u64,

    /// Roster cache freshness window, in seconds
    #[arg(long, env = "ROSTER_CACHE_TTL_SECS", default_value = "300")]
    pub roster_cache_ttl_secs: u64,

    /// Concurrent per-team statistics requests per roster fetch
    #[arg(long, env = "TEAM_STATS_CONCURRENCY", default_value = "8")]
    pub team_stats_concurrency: usize,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be positive");
        }
        if self.aggregate_timeout_secs < self.request_timeout_secs {
            anyhow::bail!(
                "aggregate_timeout_secs must be at least request_timeout_secs, \
                 otherwise a single slow call can never complete"
            );
        }
        if self.roster_cache_ttl_secs == 0 {
            anyhow::bail!("roster_cache_ttl_secs must be positive");
        }
        if !(1..=64).contains(&self.team_stats_concurrency) {
            anyhow::bail!("team_stats_concurrency must be between 1 and 64");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config::parse_from(["scorehub"])
    }

    #[test]
    fn test_defaults_validate() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_request_timeout() {
        let mut config = base();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_aggregate_deadline_shorter_than_request_timeout() {
        let mut config = base();
        config.aggregate_timeout_secs = 5;
        config.request_timeout_secs = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_concurrency() {
        let mut config = base();
        config.team_stats_concurrency = 0;
        assert!(config.validate().is_err());
        config.team_stats_concurrency = 65;
        assert!(config.validate().is_err());
    }
}
