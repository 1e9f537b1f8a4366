use clap::Parser;
use std::net::SocketAddr;

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
/// Default upload limit (32 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Server configuration, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "gridnorm-server")]
#[command(version, about = "HTTP API that turns CSV and workbook uploads into JSON records", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GRIDNORM_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "GRIDNORM_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = ServerConfig::try_parse_from(["gridnorm-server"]).unwrap();
        let default = ServerConfig::default();
        assert_eq!(parsed.addr, default.addr);
        assert_eq!(parsed.max_upload_bytes, default.max_upload_bytes);
        assert_eq!(parsed.log, default.log);
    }

    #[test]
    fn test_flags() {
        let parsed = ServerConfig::try_parse_from([
            "gridnorm-server",
            "--addr",
            "127.0.0.1:9000",
            "--max-upload-bytes",
            "1024",
        ])
        .unwrap();
        assert_eq!(parsed.addr.port(), 9000);
        assert_eq!(parsed.max_upload_bytes, 1024);
    }

    #[test]
    fn test_rejects_bad_addr() {
        assert!(ServerConfig::try_parse_from(["gridnorm-server", "--addr", "nowhere"]).is_err());
    }
}
