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

use std::io::Write;

use cloudportal::{AttributeValue, Error, NetworkError, Provider};
use common::{config_for, example_ticket, mock_ticket_endpoint, mock_token_endpoint, ticket_input};
use flate2::write::GzEncoder;
use flate2::Compression;
use httpmock::Method::{GET, POST};
use httpmock::MockServer;

const DATA_SOURCE: &str = "cloudportal_datasource";

fn list_len(value: Option<&AttributeValue>) -> usize {
    value.and_then(AttributeValue::as_list).map_or(0, <[_]>::len)
}

#[test]
fn test_read_example_ticket() {
    let server = MockServer::start();
    let token_mock = mock_token_endpoint(&server, "token-1");
    let ticket_mock =
        mock_ticket_endpoint(&server, "token-1", common::TICKET_ID, &example_ticket());

    let provider = Provider::configure(config_for(&server)).unwrap();
    let mut data = ticket_input(common::TICKET_ID);
    provider.read_data_source(DATA_SOURCE, &mut data).unwrap();

    token_mock.assert();
    ticket_mock.assert();
    assert_eq!(data.id(), common::TICKET_ID);
    assert_eq!(data.get("ticketno").and_then(AttributeValue::as_i64), Some(10234));
    assert_eq!(data.get("type").and_then(AttributeValue::as_str), Some("ServiceRequest"));
    assert_eq!(list_len(data.get("comments")), 1);
    assert_eq!(list_len(data.get("attachments")), 1);
    assert_eq!(list_len(data.get("createdby")), 1);

    let billing = data.get("billingitems").and_then(AttributeValue::as_list).unwrap();
    assert_eq!(billing.len(), 1);
    let billing = billing[0].as_object().unwrap();
    assert_eq!(list_len(billing.get("invoiceperiods")), 2);
}

#[test]
fn test_not_found_leaves_state_unset() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "token-1");
    let ticket_mock = server.mock(|when, then| {
        when.method(GET).path("/api/ticket/missing");
        then.status(404);
    });

    let provider = Provider::configure(config_for(&server)).unwrap();
    let mut data = ticket_input("missing");
    let result = provider.read_data_source(DATA_SOURCE, &mut data);

    match result {
        Err(Error::NetworkError(NetworkError::UnexpectedStatus { status_code, status })) => {
            assert_eq!(status_code, 404);
            assert_eq!(status, "404 Not Found");
        }
        other => panic!("unexpected result {other:?}"),
    }
    ticket_mock.assert();
    assert!(data.attributes().is_none());
    assert_eq!(data.id(), "");
}

#[test]
fn test_gzip_encoded_ticket() {
    let server = MockServer::start();
    mock_token_endpoint(&server, "token-1");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(example_ticket().as_bytes()).unwrap();
    let compressed = encoder.finish().unwrap();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/ticket/{}", common::TICKET_ID))
            .header("Accept-Encoding", "gzip, deflate");
        then.status(200)
            .header("Content-Encoding", "gzip")
            .body(compressed);
    });

    let provider = Provider::configure(config_for(&server)).unwrap();
    let mut data = ticket_input(common::TICKET_ID);
    provider.read_data_source(DATA_SOURCE, &mut data).unwrap();

    assert_eq!(
        data.get("title").and_then(AttributeValue::as_str),
        Some("Provision storage account for analytics")
    );
}

#[test]
fn test_rejected_credentials_skip_ticket_request() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(401).body("AADSTS7000215: Invalid client secret provided.");
    });
    let ticket_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body(example_ticket());
    });

    let provider = Provider::configure(config_for(&server)).unwrap();
    let mut data = ticket_input(common::TICKET_ID);
    let result = provider.read_data_source(DATA_SOURCE, &mut data);

    assert!(matches!(
        result,
        Err(Error::NetworkError(NetworkError::TokenRequestRejected { status: 401, .. }))
    ));
    ticket_mock.assert_hits(0);
    assert!(data.attributes().is_none());
}

#[test]
fn test_token_failure_is_isolated_per_provider() {
    let failing = MockServer::start();
    failing.mock(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let healthy = MockServer::start();
    mock_token_endpoint(&healthy, "token-2");
    mock_ticket_endpoint(&healthy, "token-2", common::TICKET_ID, &example_ticket());

    let broken = Provider::configure(config_for(&failing)).unwrap();
    let working = Provider::configure(config_for(&healthy)).unwrap();

    let mut data = ticket_input(common::TICKET_ID);
    assert!(broken.read_data_source(DATA_SOURCE, &mut data).is_err());

    let mut data = ticket_input(common::TICKET_ID);
    working.read_data_source(DATA_SOURCE, &mut data).unwrap();
    assert_eq!(data.id(), common::TICKET_ID);
}
