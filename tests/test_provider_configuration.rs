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

mod common;

use std::sync::Arc;

use cloudportal::test_utils::create_provider_with_mock_token;
use cloudportal::{
    AttributeMap, AttributeValue, ConfigurationError, DebugLog, Error, Provider, ProviderConfig,
};
use common::{example_ticket, mock_ticket_endpoint, ticket_input};
use httpmock::MockServer;

fn provider_block(server: &MockServer) -> AttributeMap {
    AttributeMap::from([
        ("api_key".to_string(), "api-key".into()),
        ("base_url".to_string(), server.url("/api").into()),
        ("debug_info".to_string(), false.into()),
        ("tenantID".to_string(), common::TENANT_ID.into()),
        ("clientID".to_string(), "client".into()),
        ("clientSecret".to_string(), "secret".into()),
        ("authority_host".to_string(), server.base_url().into()),
    ])
}

#[test]
fn test_provider_block_conforms_to_schema() {
    let server = MockServer::start();
    let config = ProviderConfig::from_attributes(&provider_block(&server)).unwrap();
    let provider = Provider::configure(config).unwrap();
    provider.schema().validate(&provider_block(&server)).unwrap();
}

#[test]
fn test_missing_api_key() {
    let server = MockServer::start();
    let mut block = provider_block(&server);
    block.insert("api_key".to_string(), "".into());

    assert_eq!(
        ProviderConfig::from_attributes(&block),
        Err(ConfigurationError::MissingEndpoint)
    );
}

#[test]
fn test_null_client_secret() {
    let server = MockServer::start();
    let mut block = provider_block(&server);
    block.insert("clientSecret".to_string(), AttributeValue::Null);

    assert_eq!(
        ProviderConfig::from_attributes(&block),
        Err(ConfigurationError::MissingAttribute("clientSecret".to_string()))
    );
}

#[test]
fn test_debug_log_records_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("provider-debug.log");
    let server = MockServer::start();
    mock_ticket_endpoint(&server, "mock_token", common::TICKET_ID, &example_ticket());

    let log = Arc::new(DebugLog::open(&path).unwrap());
    let provider = create_provider_with_mock_token(&server.url("/api"), log).unwrap();
    let mut data = ticket_input(common::TICKET_ID);
    provider
        .read_data_source("cloudportal_datasource", &mut data)
        .unwrap();
    provider.close();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("INFO: Logger initialized"));
    let ticket_url = server.url(format!("/api/ticket/{}", common::TICKET_ID));
    assert!(content.contains(&format!("DEBUG: {ticket_url}")));
    assert!(!content.contains("mock_token"));
}

#[test]
fn test_missing_id_input() {
    let server = MockServer::start();
    let log = Arc::new(DebugLog::disabled());
    let provider = create_provider_with_mock_token(&server.url("/api"), log).unwrap();

    let mut data = cloudportal::ResourceData::new();
    assert!(matches!(
        provider.read_data_source("cloudportal_datasource", &mut data),
        Err(Error::MissingInput(_))
    ));
}
