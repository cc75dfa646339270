use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding `patients.json`, `appointments.json` and `insurances.json`.
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("data"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match env::var("HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("HOST '{}' is not a valid IP address, using {}", raw, defaults.host);
                defaults.host
            }),
            Err(_) => {
                warn!("HOST not set, using {}", defaults.host);
                defaults.host
            }
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", raw, defaults.port);
                defaults.port
            }),
            Err(_) => {
                warn!("PORT not set, using {}", defaults.port);
                defaults.port
            }
        };

        let config = Self {
            host,
            port,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("DATA_DIR not set, using default");
                    defaults.data_dir
                }),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("STATIC_DIR not set, using default");
                    defaults.static_dir
                }),
        };

        if !config.is_ui_configured() {
            warn!("Static directory {} not found - UI routes will return 404", config.static_dir.display());
        }

        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn is_ui_configured(&self) -> bool {
        self.index_file().is_file()
    }
}
