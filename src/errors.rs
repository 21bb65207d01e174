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

use crate::network::NetworkError;
use crate::schema::SchemaError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error(transparent)]
    NetworkError(#[from] NetworkError),

    #[error(transparent)]
    DeserializationError(#[from] DeserializationError),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),

    #[error("Data source '{0}' is not provided by this provider")]
    UnknownDataSource(String),

    #[error("Required input attribute '{0}' is missing or not a string")]
    MissingInput(String),

    #[error("Cannot open debug log file '{path}': {source}")]
    DebugLogError {
        path: String,
        source: std::io::Error,
    },
}

/// An error that can be returned when deserializing data.
#[derive(Debug, Error)]
#[error("Cannot deserialize string '{string}': {source}")]
pub struct DeserializationError {
    pub string: String,
    pub source: DeserializationErrorKind,
}

/// Additional information for [`DeserializationError`] error
#[derive(Debug, Error)]
pub enum DeserializationErrorKind {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// The provider configuration handed over by the host is not usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("API key and base URL must be provided")]
    MissingEndpoint,

    #[error("Provider attribute '{0}' must be provided")]
    MissingAttribute(String),

    #[error("Provider attribute '{attribute}' has the wrong type, expected {expected}")]
    WrongType {
        attribute: String,
        expected: &'static str,
    },

    #[error("Cannot parse '{0}' as URL")]
    InvalidUrl(String),
}
