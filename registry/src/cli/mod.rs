//! CLI module for meow-registry
//!
//! Provides the command-line interface for the registry server.

use clap::Parser;

/// meow registry - stores canary endpoint definitions in Valkey
#[derive(Parser, Debug, Clone)]
#[command(name = "meow-registry")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    VALKEY_URL        Valkey connection string, e.g. valkey.example.com:6379/4 (required)
    MEOW_ADDR         Bind address (default: 0.0.0.0)
    MEOW_PORT         Listen port (default: 8000)
    MEOW_LOG_LEVEL    Log level (default: info)
"#)]
pub struct Cli {
    /// Listen to address
    #[arg(long, default_value = "0.0.0.0", env = "MEOW_ADDR")]
    pub addr: String,

    /// Listen on port
    #[arg(short, long, default_value = "8000", env = "MEOW_PORT")]
    pub port: u16,
}

impl Cli {
    /// バインドアドレス（`addr:port`）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}
