//! Command-line and environment configuration.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Runtime settings for the catalog server. Flags win over environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "product-catalog", version, about, long_about = None)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "PRODUCT_CATALOG_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Capacity of the product store's request channel.
    #[arg(long, env = "PRODUCT_CATALOG_CHANNEL_CAPACITY", default_value_t = 32, value_parser = parse_capacity)]
    pub channel_capacity: usize,

    /// Default log filter, used when `RUST_LOG` is unset.
    #[arg(long, env = "PRODUCT_CATALOG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("channel capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("product-catalog").chain(args.iter().copied()))
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--channel-capacity",
            "4",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(parse(&["--channel-capacity", "0"]).is_err());
        assert!(parse(&["--channel-capacity", "many"]).is_err());
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        assert!(parse(&["--host", "not-an-ip"]).is_err());
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("16"), Ok(16));
        assert!(parse_capacity("0").is_err());
    }
}
