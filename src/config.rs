use clap::Parser;

/// Live scoreboard server
#[derive(Parser, Debug, Clone)]
#[command(name = "live-scoreboard", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    /// Replay a scripted World Cup feed so the board shows live movement
    #[arg(long, env = "DEMO", default_value = "false")]
    pub demo: bool,

    /// Seconds between demo feed steps
    #[arg(long, env = "DEMO_TICK_SECS", default_value = "3")]
    pub demo_tick_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dashboard_addr.parse::<std::net::SocketAddr>().is_err() {
            anyhow::bail!(
                "dashboard_addr '{}' is not a valid socket address",
                self.dashboard_addr
            );
        }
        if self.demo_tick_secs == 0 {
            anyhow::bail!("demo_tick_secs must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_addr() {
        let config = Config {
            dashboard_addr: "not-an-addr".into(),
            demo: false,
            demo_tick_secs: 3,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let config = Config {
            dashboard_addr: "127.0.0.1:8080".into(),
            demo: true,
            demo_tick_secs: 0,
        };
        assert!(config.validate().is_err());
    }
}
