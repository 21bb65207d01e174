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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error("Failed to obtain a token: {0}")]
    TokenError(String),

    #[error("Token request failed with status {status}: {body}")]
    TokenRequestRejected { status: u16, body: String },

    #[error("Cannot parse '{0}' as URL")]
    UrlParseError(String),

    #[error("Invalid header value for '{0}'")]
    InvalidHeaderValue(String),

    #[error("API call failed with status {status_code}: {status}")]
    UnexpectedStatus { status_code: u16, status: String },

    #[error("Unsupported content encoding '{0}'")]
    UnsupportedContentEncoding(String),

    #[error("Cannot decompress '{encoding}' response body: {source}")]
    DecompressionError {
        encoding: String,
        source: std::io::Error,
    },
}
