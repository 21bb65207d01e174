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

use std::path::PathBuf;

use url::Url;

use crate::errors::ConfigurationError;
use crate::logger::DEFAULT_DEBUG_LOG_PATH;
use crate::network::DEFAULT_AUTHORITY_HOST;
use crate::value::{AttributeMap, AttributeValue};

/// Credentials for the client-credential token exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub authority_host: Url,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("authority_host", &self.authority_host.as_str())
            .finish_non_exhaustive()
    }
}

/// Validated provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: Url,
    pub debug_info: bool,
    pub debug_log_path: PathBuf,
    pub credentials: ClientCredentials,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url.as_str())
            .field("debug_info", &self.debug_info)
            .field("debug_log_path", &self.debug_log_path)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl ProviderConfig {
    /// Creates a configuration after checking that every value is usable.
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key of the Cloudportal API.
    /// * `base_url` - Base URL of the Cloudportal API.
    /// * `debug_info` - Whether to write the debug log file.
    /// * `tenant_id`, `client_id`, `client_secret` - Credentials used to request tokens.
    pub fn new(
        api_key: &str,
        base_url: &str,
        debug_info: bool,
        tenant_id: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Self, ConfigurationError> {
        if api_key.is_empty() || base_url.is_empty() {
            return Err(ConfigurationError::MissingEndpoint);
        }
        let base_url = parse_url(base_url)?;

        for (name, value) in [
            ("tenantID", tenant_id),
            ("clientID", client_id),
            ("clientSecret", client_secret),
        ] {
            if value.is_empty() {
                return Err(ConfigurationError::MissingAttribute(name.to_string()));
            }
        }

        Ok(Self {
            api_key: api_key.to_string(),
            base_url,
            debug_info,
            debug_log_path: PathBuf::from(DEFAULT_DEBUG_LOG_PATH),
            credentials: ClientCredentials {
                tenant_id: tenant_id.to_string(),
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
                authority_host: parse_url(DEFAULT_AUTHORITY_HOST)?,
            },
        })
    }

    /// Overrides the identity provider host.
    pub fn with_authority_host(mut self, authority_host: &str) -> Result<Self, ConfigurationError> {
        self.credentials.authority_host = parse_url(authority_host)?;
        Ok(self)
    }

    pub fn with_debug_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_log_path = path.into();
        self
    }

    /// Reads the provider block as handed over by the host.
    pub fn from_attributes(attributes: &AttributeMap) -> Result<Self, ConfigurationError> {
        let mut config = Self::new(
            required_string(attributes, "api_key")?,
            required_string(attributes, "base_url")?,
            required_bool(attributes, "debug_info")?,
            required_string(attributes, "tenantID")?,
            required_string(attributes, "clientID")?,
            required_string(attributes, "clientSecret")?,
        )?;
        if let Some(host) = optional_string(attributes, "authority_host")? {
            config = config.with_authority_host(host)?;
        }
        if let Some(path) = optional_string(attributes, "debug_log_path")? {
            config = config.with_debug_log_path(path);
        }
        Ok(config)
    }
}

fn parse_url(value: &str) -> Result<Url, ConfigurationError> {
    Url::parse(value).map_err(|_| ConfigurationError::InvalidUrl(value.to_string()))
}

fn optional_string<'a>(
    attributes: &'a AttributeMap,
    name: &str,
) -> Result<Option<&'a str>, ConfigurationError> {
    match attributes.get(name) {
        None | Some(AttributeValue::Null) => Ok(None),
        Some(AttributeValue::String(s)) => Ok(Some(s)),
        Some(_) => Err(ConfigurationError::WrongType {
            attribute: name.to_string(),
            expected: "string",
        }),
    }
}

// Empty strings are handed through so `ProviderConfig::new` reports them.
fn required_string<'a>(
    attributes: &'a AttributeMap,
    name: &str,
) -> Result<&'a str, ConfigurationError> {
    optional_string(attributes, name)?
        .ok_or_else(|| ConfigurationError::MissingAttribute(name.to_string()))
}

fn required_bool(attributes: &AttributeMap, name: &str) -> Result<bool, ConfigurationError> {
    match attributes.get(name) {
        None | Some(AttributeValue::Null) => {
            Err(ConfigurationError::MissingAttribute(name.to_string()))
        }
        Some(AttributeValue::Bool(b)) => Ok(*b),
        Some(_) => Err(ConfigurationError::WrongType {
            attribute: name.to_string(),
            expected: "bool",
        }),
    }
}
