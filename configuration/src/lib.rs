use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use serde::Deserialize;

pub fn get_config<'de, T: Deserialize<'de>>(
    config_path: PathBuf,
) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

pub fn config_from_toml<'de, T: Deserialize<'de>>(toml: &str) -> Result<T, config::ConfigError> {
    let f = config::File::from_str(toml, config::FileFormat::Toml);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Deserialize)]
pub struct ResponderConfiguration {
    pub server: ServerConfiguration,
    #[serde(default)]
    pub records: Vec<RecordConfiguration>,
}

impl ResponderConfiguration {
    /// Later entries win when a name is listed twice.
    pub fn resolution_table(&self) -> HashMap<String, String> {
        let mut table = HashMap::with_capacity(self.records.len());
        for record in &self.records {
            if let Some(previous) = table.insert(record.name.clone(), record.address.clone()) {
                tracing::warn!(
                    "record {} listed more than once, {} replaced by {}",
                    record.name,
                    previous,
                    record.address
                );
            }
        }
        table
    }
}

#[derive(Debug, Deserialize)]
pub struct ServerConfiguration {
    ip_address: IpAddr,
    port: u16,
}

impl ServerConfiguration {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip_address, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfiguration {
    pub name: String,
    pub address: String,
}
