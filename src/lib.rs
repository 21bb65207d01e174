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

//! Provider logic exposing Cloudportal tickets as a read-only data source.
//!
//! A [`Provider`] is configured from a [`ProviderConfig`]. It requests access
//! tokens with client credentials, fetches tickets from
//! `{base_url}/ticket/{id}` and flattens them into the attribute tree declared
//! by [`schema::ticket_schema`].
//!
//! ```no_run
//! use cloudportal::{AttributeMap, Provider, ProviderConfig, ResourceData};
//!
//! # fn main() -> cloudportal::Result<()> {
//! let config = ProviderConfig::new(
//!     "api-key",
//!     "https://portal.example.com/api",
//!     false,
//!     "tenant-id",
//!     "client-id",
//!     "client-secret",
//! )?;
//! let provider = Provider::configure(config)?;
//!
//! let mut data = ResourceData::with_input(AttributeMap::from([(
//!     "id".to_string(),
//!     "7f3c2a10-5d7e-4a8b-9c1f-2e6d8b4a9f01".into(),
//! )]));
//! provider.read_data_source("cloudportal_datasource", &mut data)?;
//! println!("{:?}", data.get("title"));
//! # Ok(())
//! # }
//! ```

mod errors;
pub mod flatten;
mod logger;
pub mod network;
mod provider;
pub mod schema;
mod value;

#[cfg(feature = "test_utils")]
pub mod test_utils;

pub use errors::{
    ConfigurationError, DeserializationError, DeserializationErrorKind, Error, Result,
};
pub use flatten::{flatten_ticket, Flatten};
pub use logger::{DebugLog, DEFAULT_DEBUG_LOG_PATH};
pub use network::models::Ticket;
pub use network::{
    ClientSecretCredential, NetworkError, NetworkResult, TicketClient, TokenProvider,
    DEFAULT_AUTHORITY_HOST,
};
pub use provider::{
    ClientCredentials, DataSource, Provider, ProviderConfig, ResourceData, TicketDataSource,
};
pub use schema::{Attribute, AttributeKind, AttributeMode, Block, SchemaError};
pub use value::{AttributeMap, AttributeValue};
