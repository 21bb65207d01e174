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

//! Declarative attribute schemas for the provider configuration and the
//! ticket data source.

mod provider;
mod ticket;

pub use provider::provider_schema;
pub use ticket::{
    action_schema, attachment_schema, billing_item_schema, catalog_field_schema,
    catalog_item_schema, change_schema, clarity_code_schema, comment_schema,
    history_item_schema, invoice_period_schema, participant_schema, ticket_schema, user_schema,
};

use thiserror::Error;

use crate::value::{AttributeMap, AttributeValue};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Attribute '{path}' is not declared in the schema")]
    UnknownAttribute { path: String },

    #[error("Attribute '{path}' expects {expected}, got {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: &'static str,
    },

    #[error("Required attribute '{path}' has no value")]
    MissingRequired { path: String },
}

/// The type of values an attribute accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    String,
    Int,
    Float,
    Bool,
    List(Box<AttributeKind>),
    Map(Box<AttributeKind>),
    Block(Block),
}

impl AttributeKind {
    pub fn list_of(kind: AttributeKind) -> Self {
        Self::List(Box::new(kind))
    }

    pub fn map_of(kind: AttributeKind) -> Self {
        Self::Map(Box::new(kind))
    }

    /// A list whose elements are instances of `block`.
    pub fn blocks(block: Block) -> Self {
        Self::List(Box::new(Self::Block(block)))
    }

    fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Int => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::Bool => "bool".to_string(),
            Self::List(elem) => format!("list of {}", elem.describe()),
            Self::Map(elem) => format!("map of {}", elem.describe()),
            Self::Block(_) => "object".to_string(),
        }
    }

    fn check(&self, path: &str, value: &AttributeValue) -> Result<(), SchemaError> {
        let mismatch = || SchemaError::TypeMismatch {
            path: path.to_string(),
            expected: self.describe(),
            found: value.kind_name(),
        };
        match (self, value) {
            // Nullability is decided by the attribute mode, not the kind.
            (_, AttributeValue::Null) => Ok(()),
            (Self::String, AttributeValue::String(_))
            | (Self::Int, AttributeValue::Int(_))
            | (Self::Float, AttributeValue::Float(_))
            | (Self::Bool, AttributeValue::Bool(_)) => Ok(()),
            (Self::List(elem), AttributeValue::List(items)) => items
                .iter()
                .enumerate()
                .try_for_each(|(i, item)| elem.check(&format!("{path}.{i}"), item)),
            (Self::Map(elem), AttributeValue::Map(entries)) => entries
                .iter()
                .try_for_each(|(key, item)| elem.check(&format!("{path}.{key}"), item)),
            (Self::Block(block), AttributeValue::Object(object)) => block.check(path, object),
            _ => Err(mismatch()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be supplied by the configuration.
    Required,
    /// May be supplied by the configuration.
    Optional,
    /// Set by the provider.
    Computed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    pub description: &'static str,
}

impl Attribute {
    pub fn required(name: &'static str, kind: AttributeKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            mode: AttributeMode::Required,
            description,
        }
    }

    pub fn optional(name: &'static str, kind: AttributeKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            mode: AttributeMode::Optional,
            description,
        }
    }

    pub fn computed(name: &'static str, kind: AttributeKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            mode: AttributeMode::Computed,
            description,
        }
    }
}

/// An ordered table of attributes describing one record shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    attributes: Vec<Attribute>,
}

impl Block {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attribute_names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|a| a.name).collect()
    }

    /// Checks that `values` only uses declared attributes, that every value
    /// has the declared kind and that no required attribute is missing.
    pub fn validate(&self, values: &AttributeMap) -> Result<(), SchemaError> {
        self.check("", values)
    }

    fn check(&self, prefix: &str, values: &AttributeMap) -> Result<(), SchemaError> {
        let path_of = |name: &str| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}.{name}")
            }
        };

        for (name, value) in values {
            let attribute = self
                .attribute(name)
                .ok_or_else(|| SchemaError::UnknownAttribute {
                    path: path_of(name),
                })?;
            attribute.kind.check(&path_of(name), value)?;
        }

        for attribute in &self.attributes {
            if attribute.mode == AttributeMode::Required
                && values.get(attribute.name).is_none_or(AttributeValue::is_null)
            {
                return Err(SchemaError::MissingRequired {
                    path: path_of(attribute.name),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn period_block() -> Block {
        Block::new(vec![
            Attribute::required("label", AttributeKind::String, "Label"),
            Attribute::optional("cost", AttributeKind::Float, "Cost"),
        ])
    }

    fn values(entries: Vec<(&str, AttributeValue)>) -> AttributeMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_validate_accepts_conforming_values() {
        let block = Block::new(vec![
            Attribute::required("id", AttributeKind::String, "Id"),
            Attribute::computed("periods", AttributeKind::blocks(period_block()), "Periods"),
            Attribute::computed(
                "vars",
                AttributeKind::map_of(AttributeKind::String),
                "Variables",
            ),
        ]);
        let period = values(vec![("label", "Jan".into()), ("cost", AttributeValue::Null)]);
        let input = values(vec![
            ("id", "t1".into()),
            ("periods", AttributeValue::List(vec![period.into()])),
            (
                "vars",
                AttributeValue::Map(BTreeMap::from([(
                    "k".to_string(),
                    AttributeValue::from("v"),
                )])),
            ),
        ]);
        assert_eq!(block.validate(&input), Ok(()));
    }

    #[test]
    fn test_validate_unknown_attribute() {
        let input = values(vec![("label", "Jan".into()), ("extra", true.into())]);
        assert_eq!(
            period_block().validate(&input),
            Err(SchemaError::UnknownAttribute {
                path: "extra".into()
            })
        );
    }

    #[test]
    fn test_validate_type_mismatch_reports_nested_path() {
        let block = Block::new(vec![Attribute::computed(
            "periods",
            AttributeKind::blocks(period_block()),
            "Periods",
        )]);
        let period = values(vec![("label", "Jan".into()), ("cost", "cheap".into())]);
        let input = values(vec![("periods", AttributeValue::List(vec![period.into()]))]);

        let err = block.validate(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Attribute 'periods.0.cost' expects float, got string"
        );
    }

    #[test]
    fn test_validate_missing_required() {
        let input = values(vec![("cost", 1.0.into())]);
        assert_eq!(
            period_block().validate(&input),
            Err(SchemaError::MissingRequired {
                path: "label".into()
            })
        );
    }
}
