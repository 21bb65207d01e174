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

pub mod errors;
pub(crate) mod http_client;
pub mod models;
mod token_provider;

pub use http_client::TicketClient;
pub use token_provider::{ClientSecretCredential, TokenProvider, DEFAULT_AUTHORITY_HOST};

pub use errors::NetworkError;
pub type NetworkResult<T> = std::result::Result<T, NetworkError>;
