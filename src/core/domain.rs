use std::net::{IpAddr, SocketAddr};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_demo: false,
        }
    }

    pub fn from_env(branch_id: &str) -> LibraryResult<Self> {
        Self::from_lookup(branch_id, |key| std::env::var(key).ok())
    }

    // Reads CATALOG_HOST, CATALOG_PORT and CATALOG_SEED_DEMO through the given lookup.
    pub(crate) fn from_lookup<F>(branch_id: &str, lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(branch_id);
        if let Some(host) = lookup("CATALOG_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("CATALOG_PORT") {
            config.port = port.trim().parse::<u16>().map_err(|err| LibraryError::validation(
                format!("invalid CATALOG_PORT {:?}: {}", port, err).as_str(), None))?;
        }
        if let Some(seed) = lookup("CATALOG_SEED_DEMO") {
            config.seed_demo = match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(LibraryError::validation(
                        format!("invalid CATALOG_SEED_DEMO {:?}", other).as_str(), None));
                }
            };
        }
        Ok(config)
    }

    // The host must be an IP literal, v4 or v6 (e.g. `::`).
    pub fn bind_address(&self) -> LibraryResult<SocketAddr> {
        let ip: IpAddr = self.host.trim_start_matches('[').trim_end_matches(']').parse()
            .map_err(|err| LibraryError::validation(
                format!("invalid CATALOG_HOST {:?}: {}", self.host, err).as_str(), None))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
