use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// Serve minesweeper games over HTTP.
#[derive(Debug, Parser)]
#[command(name = "minehost-server", version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MINEHOST_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MINEHOST_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Maximum number of games kept in memory at once
    #[arg(long, env = "MINEHOST_MAX_GAMES")]
    pub max_games: Option<usize>,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
