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

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use super::{NetworkError, NetworkResult};

pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

pub trait TokenProvider: std::fmt::Debug + Send + Sync {
    fn get_access_token(&self) -> NetworkResult<String>;
}

/// Client-credential token exchange against a Microsoft identity platform
/// tenant.
pub struct ClientSecretCredential {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    pub(crate) endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for ClientSecretCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientSecretCredential")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

impl ClientSecretCredential {
    /// Creates a credential requesting tokens from `authority_host`
    /// (usually [`DEFAULT_AUTHORITY_HOST`]).
    pub fn new(
        authority_host: &str,
        tenant_id: &str,
        client_id: &str,
        client_secret: &str,
    ) -> NetworkResult<Self> {
        let endpoint = format!(
            "{}/{tenant_id}/oauth2/v2.0/token",
            authority_host.trim_end_matches('/')
        );
        let endpoint = Url::parse(&endpoint).map_err(|_| NetworkError::UrlParseError(endpoint))?;
        Ok(Self {
            tenant_id: tenant_id.to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            endpoint,
            client: Client::new(),
        })
    }

    /// Scope requested for the Cloudportal API, `{tenant_id}/.default`.
    pub fn scope(&self) -> String {
        format!("{}/.default", self.tenant_id)
    }
}

impl TokenProvider for ClientSecretCredential {
    fn get_access_token(&self) -> NetworkResult<String> {
        let scope = self.scope();
        let form_data = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", scope.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Accept", "application/json")
            .form(&form_data)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NetworkError::TokenRequestRejected {
                status: status.as_u16(),
                body,
            });
        }

        let token = response
            .json::<AccessTokenResponse>()
            .map_err(|e| NetworkError::TokenError(e.to_string()))?;
        Ok(token.access_token)
    }
}
