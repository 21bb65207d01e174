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

#![allow(dead_code)]

use std::path::PathBuf;

use cloudportal::{AttributeMap, ProviderConfig, ResourceData};
use httpmock::Method::{GET, POST};
use httpmock::{Mock, MockServer};

pub const TICKET_ID: &str = "7f3c2a10-5d7e-4a8b-9c1f-2e6d8b4a9f01";
pub const TENANT_ID: &str = "tenant";

pub fn example_ticket() -> String {
    let mut mocked_data = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    mocked_data.push("data/ticket-example.json");
    std::fs::read_to_string(mocked_data).unwrap()
}

/// Token endpoint issuing `token` for [`TENANT_ID`].
pub fn mock_token_endpoint<'a>(server: &'a MockServer, token: &str) -> Mock<'a> {
    let body = serde_json::json!({
        "token_type": "Bearer",
        "expires_in": 3599,
        "access_token": token,
    });
    server.mock(|when, then| {
        when.method(POST)
            .path(format!("/{TENANT_ID}/oauth2/v2.0/token"))
            .form_urlencoded_tuple("grant_type", "client_credentials")
            .form_urlencoded_tuple("scope", format!("{TENANT_ID}/.default"));
        then.status(200).json_body(body);
    })
}

/// Ticket endpoint answering requests authorized with `token`.
pub fn mock_ticket_endpoint<'a>(
    server: &'a MockServer,
    token: &str,
    ticket_id: &str,
    body: &str,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/ticket/{ticket_id}"))
            .header("Authorization", format!("Bearer {token}"));
        then.status(200)
            .header("Content-Type", "application/json")
            .body(body);
    })
}

/// Configuration pointing both the API and the identity provider at `server`.
pub fn config_for(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new(
        "api-key",
        &server.url("/api"),
        false,
        TENANT_ID,
        "client",
        "secret",
    )
    .unwrap()
    .with_authority_host(&server.base_url())
    .unwrap()
}

pub fn ticket_input(id: &str) -> ResourceData {
    ResourceData::with_input(AttributeMap::from([("id".to_string(), id.into())]))
}
