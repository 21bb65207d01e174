// (C) Copyright IBM Corp. 2024.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod config;
mod data_source;
mod resource_data;

pub use config::{ClientCredentials, ProviderConfig};
pub use data_source::{DataSource, TicketDataSource};
pub use resource_data::ResourceData;

use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::logger::DebugLog;
use crate::network::{ClientSecretCredential, TicketClient};
use crate::schema::{provider_schema, Block};

/// The Cloudportal provider: owns the debug log and the data sources built
/// on top of one configured [`TicketClient`].
#[derive(Debug)]
pub struct Provider {
    data_sources: Vec<Box<dyn DataSource>>,
    log: Arc<DebugLog>,
}

impl Provider {
    /// Builds a provider that requests tokens with the configured client
    /// credentials.
    ///
    /// When `debug_info` is set the debug log file is opened (appending) and
    /// failing to open it fails the configuration.
    pub fn configure(config: ProviderConfig) -> Result<Self> {
        let log = if config.debug_info {
            DebugLog::open(&config.debug_log_path)?
        } else {
            DebugLog::disabled()
        };
        let log = Arc::new(log);

        let credentials = &config.credentials;
        let token_provider = ClientSecretCredential::new(
            credentials.authority_host.as_str(),
            &credentials.tenant_id,
            &credentials.client_id,
            &credentials.client_secret,
        )?;
        log.debug(format!("Token endpoint : {}", token_provider.endpoint));

        let client = TicketClient::new(config.base_url, Box::new(token_provider), log.clone());
        log::info!("Provider configured for {}", client.base_url());
        Ok(Self::new(client, log))
    }

    /// Assembles a provider from an already built client.
    pub fn new(client: TicketClient, log: Arc<DebugLog>) -> Self {
        let client = Arc::new(client);
        Self {
            data_sources: vec![Box::new(TicketDataSource::new(client))],
            log,
        }
    }

    /// Schema of the provider configuration block.
    pub fn schema(&self) -> Block {
        provider_schema()
    }

    pub fn data_source_names(&self) -> Vec<&'static str> {
        self.data_sources.iter().map(|ds| ds.name()).collect()
    }

    pub fn data_source_schema(&self, name: &str) -> Result<Block> {
        Ok(self.data_source(name)?.schema())
    }

    /// Reads the data source `name` into `data`.
    pub fn read_data_source(&self, name: &str, data: &mut ResourceData) -> Result<()> {
        self.data_source(name)?.read(data)
    }

    pub fn debug_log(&self) -> &Arc<DebugLog> {
        &self.log
    }

    /// Flushes and closes the debug log.
    pub fn close(&self) {
        self.log.info("Provider closed");
        self.log.close();
    }

    fn data_source(&self, name: &str) -> Result<&dyn DataSource> {
        self.data_sources
            .iter()
            .find(|ds| ds.name() == name)
            .map(|ds| ds.as_ref())
            .ok_or_else(|| Error::UnknownDataSource(name.to_string()))
    }
}
