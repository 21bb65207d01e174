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

use std::env;
use std::error::Error;

use cloudportal::{AttributeMap, Provider, ProviderConfig, ResourceData};
use dotenvy::dotenv;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    dotenv().ok();
    let api_key = env::var("CLOUDPORTAL_API_KEY").expect("CLOUDPORTAL_API_KEY should be set.");
    let base_url = env::var("CLOUDPORTAL_BASE_URL").expect("CLOUDPORTAL_BASE_URL should be set.");
    let tenant_id = env::var("TENANT_ID").expect("TENANT_ID should be set.");
    let client_id = env::var("CLIENT_ID").expect("CLIENT_ID should be set.");
    let client_secret = env::var("CLIENT_SECRET").expect("CLIENT_SECRET should be set.");
    let ticket_id = env::var("TICKET_ID").expect("TICKET_ID should be set.");
    let debug_info = env::var("DEBUG_INFO").is_ok_and(|v| v == "true");

    let config = ProviderConfig::new(
        &api_key,
        &base_url,
        debug_info,
        &tenant_id,
        &client_id,
        &client_secret,
    )?;
    let provider = Provider::configure(config)?;

    let mut data = ResourceData::with_input(AttributeMap::from([(
        "id".to_string(),
        ticket_id.into(),
    )]));
    match provider.read_data_source("cloudportal_datasource", &mut data) {
        Ok(()) => {
            println!("Ticket {}:", data.id());
            println!("{}", serde_json::to_string_pretty(&data.attributes())?);
        }
        Err(error) => {
            println!("There was an error reading the ticket. Error {error}");
        }
    }

    provider.close();
    Ok(())
}
