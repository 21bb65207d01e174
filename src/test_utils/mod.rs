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

use std::sync::Arc;

use url::Url;

use crate::errors::{ConfigurationError, Result};
use crate::logger::DebugLog;
use crate::network::{NetworkResult, TicketClient, TokenProvider};
use crate::Provider;

#[derive(Debug)]
pub struct MockTokenProvider {}

impl TokenProvider for MockTokenProvider {
    fn get_access_token(&self) -> NetworkResult<String> {
        Ok("mock_token".into())
    }
}

/// Creates a [`Provider`] that talks to the API at `base_url` using a
/// static `mock_token` bearer token.
pub fn create_provider_with_mock_token(base_url: &str, log: Arc<DebugLog>) -> Result<Provider> {
    let base_url =
        Url::parse(base_url).map_err(|_| ConfigurationError::InvalidUrl(base_url.to_string()))?;
    let client = TicketClient::new(base_url, Box::new(MockTokenProvider {}), log.clone());
    Ok(Provider::new(client, log))
}
