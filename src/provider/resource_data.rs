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

use crate::errors::Result;
use crate::schema::Block;
use crate::value::{AttributeMap, AttributeValue};

/// Host state of a single data source instance.
///
/// The host fills in the input attributes, a read fills in the computed
/// attributes and the resource ID. Nothing is committed unless the whole
/// attribute set conforms to the schema.
#[derive(Debug, Clone, Default)]
pub struct ResourceData {
    input: AttributeMap,
    state: Option<AttributeMap>,
    id: Option<String>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the state for a read of the given input attributes.
    pub fn with_input(input: AttributeMap) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    /// Value of an input attribute, if it is a string.
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.input.get(name).and_then(AttributeValue::as_str)
    }

    /// Validates `attributes` against `schema` and commits them.
    ///
    /// On error the previously committed attributes are kept untouched.
    pub fn apply(&mut self, schema: &Block, attributes: AttributeMap) -> Result<()> {
        schema.validate(&attributes)?;
        self.state = Some(attributes);
        Ok(())
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// The resource ID, empty until a read succeeded.
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// The committed attributes, `None` until a read succeeded.
    pub fn attributes(&self) -> Option<&AttributeMap> {
        self.state.as_ref()
    }

    /// A committed attribute.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.state.as_ref().and_then(|state| state.get(name))
    }
}
