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

use std::io::Read;
use std::sync::Arc;

use flate2::read::{GzDecoder, ZlibDecoder};
use reqwest::blocking::Client;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION,
    CONTENT_ENCODING,
};
use reqwest::StatusCode;
use url::Url;

use super::models::Ticket;
use super::{NetworkError, NetworkResult, TokenProvider};
use crate::errors::Result;
use crate::logger::DebugLog;

/// Client for the Cloudportal ticket API.
#[derive(Debug)]
pub struct TicketClient {
    base_url: Url,
    token_provider: Box<dyn TokenProvider>,
    client: Client,
    logger: Arc<DebugLog>,
}

impl TicketClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API, e.g. `https://portal.example.com/api`.
    /// * `token_provider` - An object that can provide the tokens required by the server.
    /// * `logger` - The debug log shared with the provider.
    pub fn new(
        base_url: Url,
        token_provider: Box<dyn TokenProvider>,
        logger: Arc<DebugLog>,
    ) -> Self {
        Self {
            base_url,
            token_provider,
            client: Client::new(),
            logger,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base_url}/ticket/{ticket_id}`, with the ID as a single path segment.
    pub(crate) fn ticket_url(&self, ticket_id: &str) -> NetworkResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NetworkError::UrlParseError(self.base_url.to_string()))?
            .pop_if_empty()
            .push("ticket")
            .push(ticket_id);
        Ok(url)
    }

    /// Fetches and decodes the ticket with the given ID.
    pub fn get_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        let body = self.fetch_ticket_body(ticket_id).inspect_err(|e| {
            self.logger.error(e);
        })?;
        self.logger.debug(String::from_utf8_lossy(&body));

        Ticket::from_slice(&body).inspect_err(|e| {
            self.logger.error(e);
        })
    }

    fn fetch_ticket_body(&self, ticket_id: &str) -> NetworkResult<Vec<u8>> {
        let token = self.token_provider.get_access_token()?;
        self.logger.debug("Access token acquired");

        let url = self.ticket_url(ticket_id)?;
        self.logger.debug(&url);

        let response = self
            .client
            .get(url)
            .headers(Self::request_headers(&token)?)
            .send()?;

        let status = response.status();
        self.logger.debug(status);
        if status != StatusCode::OK {
            return Err(NetworkError::UnexpectedStatus {
                status_code: status.as_u16(),
                status: status.to_string(),
            });
        }

        let encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_ascii_lowercase());
        let raw = response.bytes()?;

        decode_body(encoding.as_deref(), &raw)
    }

    fn request_headers(token: &str) -> NetworkResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-IN,en-GB;q=0.9,en;q=0.8,en-US;q=0.7"),
        );
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| NetworkError::InvalidHeaderValue("Authorization".to_string()))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }
}

/// Undoes the transport encoding announced by `Content-Encoding`.
pub(crate) fn decode_body(encoding: Option<&str>, raw: &[u8]) -> NetworkResult<Vec<u8>> {
    let decompression_error = |source| NetworkError::DecompressionError {
        encoding: encoding.unwrap_or_default().to_string(),
        source,
    };

    let mut decoded = Vec::new();
    match encoding {
        None | Some("") | Some("identity") => return Ok(raw.to_vec()),
        Some("gzip") | Some("x-gzip") => {
            GzDecoder::new(raw)
                .read_to_end(&mut decoded)
                .map_err(decompression_error)?;
        }
        Some("deflate") => {
            ZlibDecoder::new(raw)
                .read_to_end(&mut decoded)
                .map_err(decompression_error)?;
        }
        Some(other) => {
            return Err(NetworkError::UnsupportedContentEncoding(other.to_string()));
        }
    }
    Ok(decoded)
}
