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

use super::{Attribute, AttributeKind, Block};

/// Schema of the provider configuration block.
pub fn provider_schema() -> Block {
    Block::new(vec![
        Attribute::required(
            "api_key",
            AttributeKind::String,
            "API key for authenticating with the custom API",
        ),
        Attribute::required("base_url", AttributeKind::String, "Base URL of the custom API"),
        Attribute::required(
            "debug_info",
            AttributeKind::Bool,
            "Write debug information to the provider log file",
        ),
        Attribute::required(
            "clientID",
            AttributeKind::String,
            "Client ID used to request tokens from the identity provider",
        ),
        Attribute::required(
            "clientSecret",
            AttributeKind::String,
            "Client secret used to request tokens from the identity provider",
        ),
        Attribute::required(
            "tenantID",
            AttributeKind::String,
            "Tenant ID; also determines the token scope",
        ),
        Attribute::optional(
            "authority_host",
            AttributeKind::String,
            "Identity provider host, defaults to https://login.microsoftonline.com",
        ),
        Attribute::optional(
            "debug_log_path",
            AttributeKind::String,
            "Path of the debug log file, defaults to provider-debug.log",
        ),
    ])
}
