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

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::errors::{DeserializationError, Error, Result};

/// Decodes `null` as the type's default value, the same way a missing key is
/// handled by `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Represents a Cloudportal ticket as returned by the `/ticket/{id}` endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Ticket {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub ticketno: i64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub status: String,
    #[serde(deserialize_with = "nullable")]
    pub substatus: String,
    /// Timestamp when the status was last changed.
    #[serde(deserialize_with = "nullable")]
    pub statuschangedat: String,
    #[serde(deserialize_with = "nullable")]
    pub createdat: String,
    /// The user who created the ticket.
    #[serde(deserialize_with = "nullable")]
    pub createdby: User,
    /// The user who last changed the ticket.
    #[serde(deserialize_with = "nullable")]
    pub changedby: User,
    #[serde(deserialize_with = "nullable")]
    pub claritycode: ClarityCode,
    #[serde(deserialize_with = "nullable")]
    pub participants: Vec<Participant>,
    #[serde(deserialize_with = "nullable")]
    pub comments: Vec<Comment>,
    #[serde(deserialize_with = "nullable")]
    pub attachments: Vec<Attachment>,
    #[serde(deserialize_with = "nullable")]
    pub billingitems: Vec<BillingItem>,
    #[serde(deserialize_with = "nullable")]
    pub historyitems: Vec<HistoryItem>,
    /// Actions that can currently be performed on the ticket.
    #[serde(deserialize_with = "nullable")]
    pub validactions: Vec<Action>,
    #[serde(deserialize_with = "nullable")]
    pub editableproperties: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub mandatoryproperties: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub etag: String,
    #[serde(deserialize_with = "nullable")]
    pub r#type: String,
    #[serde(deserialize_with = "nullable")]
    pub serviceprovider: String,
    #[serde(deserialize_with = "nullable")]
    pub cloudplatform: String,
    #[serde(deserialize_with = "nullable")]
    pub catalogitems: Vec<CatalogItem>,
}

impl Ticket {
    /// Parses a [`Ticket`] from a decoded response body.
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self> {
        decode_record(body)
    }
}

/// Fields whose JSON objects are maps keyed by data, not records.
const MAP_FIELDS: [&str; 4] = ["invoiceperiods", "oldvalue", "newvalue", "variables"];

/// Decodes a record matching field names case-insensitively. When several
/// keys fold to the same field, the last one in the body wins.
pub(crate) fn decode_record<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let to_error = |e: serde_json::Error| -> Error {
        DeserializationError {
            string: String::from_utf8_lossy(body).into_owned(),
            source: e.into(),
        }
        .into()
    };
    let value = serde_json::from_slice::<Value>(body).map_err(to_error)?;
    serde_json::from_value(fold_field_names(value)).map_err(to_error)
}

fn fold_field_names(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut folded = Map::with_capacity(object.len());
            for (key, value) in object {
                let key = key.to_lowercase();
                let value = if MAP_FIELDS.contains(&key.as_str()) {
                    fold_map_values(value)
                } else {
                    fold_field_names(value)
                };
                folded.insert(key, value);
            }
            Value::Object(folded)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(fold_field_names).collect()),
        other => other,
    }
}

fn fold_map_values(value: Value) -> Value {
    match value {
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, fold_field_names(value)))
                .collect(),
        ),
        other => other,
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub userprincipalname: String,
    #[serde(deserialize_with = "nullable")]
    pub displayname: String,
    #[serde(deserialize_with = "nullable")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Participant {
    #[serde(deserialize_with = "nullable")]
    pub userinfo: User,
    #[serde(deserialize_with = "nullable")]
    pub role: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub createdat: String,
    #[serde(deserialize_with = "nullable")]
    pub modifiedat: String,
    #[serde(deserialize_with = "nullable")]
    pub author: User,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub loginuser: User,
    #[serde(deserialize_with = "nullable")]
    pub iseditable: bool,
    #[serde(deserialize_with = "nullable")]
    pub iseditmode: bool,
    #[serde(deserialize_with = "nullable")]
    pub contentcopy: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Action {
    #[serde(deserialize_with = "nullable")]
    pub actionname: String,
    #[serde(deserialize_with = "nullable")]
    pub requiredproperties: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub r#type: String,
    #[serde(deserialize_with = "nullable")]
    pub minnumofcatalogitems: i64,
}

/// A billing period of a [`BillingItem`].
///
/// The label of the period is the key under which the server sends it, the
/// `invoiceperiod` field in the body is usually left empty.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct InvoicePeriod {
    #[serde(deserialize_with = "nullable")]
    pub invoiceperiod: String,
    #[serde(deserialize_with = "nullable")]
    pub actualcost: f64,
    #[serde(deserialize_with = "nullable")]
    pub startdate: String,
    #[serde(deserialize_with = "nullable")]
    pub enddate: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct BillingItem {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub partitionkey: String,
    #[serde(deserialize_with = "nullable")]
    pub subscriptionname: String,
    /// Periods keyed by their label (e.g. `Jan-2024`), iterated in plain
    /// string order of the label: `Feb-2024` comes before `Jan-2024`. The
    /// order is stable across reads, not chronological.
    #[serde(deserialize_with = "nullable")]
    pub invoiceperiods: BTreeMap<String, InvoicePeriod>,
}

/// A single property modification recorded in a [`HistoryItem`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Change {
    #[serde(deserialize_with = "nullable")]
    pub propertyname: String,
    #[serde(deserialize_with = "nullable")]
    pub oldvalue: BTreeMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub newvalue: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryItem {
    #[serde(deserialize_with = "nullable")]
    pub date: String,
    #[serde(deserialize_with = "nullable")]
    pub author: Vec<User>,
    #[serde(deserialize_with = "nullable")]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogItem {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub resourcename: String,
    #[serde(deserialize_with = "nullable")]
    pub label: String,
    pub catalogitemdisclaimer: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub catalogitemcloudplatform: String,
    #[serde(deserialize_with = "nullable")]
    pub tickettypes: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub active: bool,
    #[serde(deserialize_with = "nullable")]
    pub catalogitemversion: i64,
    #[serde(deserialize_with = "nullable")]
    pub catalogitemcreated: String,
    #[serde(deserialize_with = "nullable")]
    pub catalogitemapproved: String,
    #[serde(deserialize_with = "nullable")]
    pub catalogitemapprovedby: String,
    pub catalogitemicon: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub catalogfields: Vec<CatalogField>,
    #[serde(deserialize_with = "nullable")]
    pub variables: BTreeMap<String, String>,
    pub resourcecontractname: Option<String>,
    pub resourcecontainername: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogField {
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    #[serde(deserialize_with = "nullable")]
    pub label: String,
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub ismandatory: bool,
    pub lookupfunction: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub lookupvalues: Vec<String>,
    pub hintvalue: Option<String>,
    pub inputtype: Option<String>,
    pub inputformat: Option<String>,
    pub enabletoggleby: Option<String>,
    pub disabled: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Attachment {
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub uploaddatetime: String,
    #[serde(deserialize_with = "nullable")]
    pub uploadedby: Vec<User>,
    #[serde(deserialize_with = "nullable")]
    pub filename: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClarityCode {
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub costcenter: String,
    #[serde(deserialize_with = "nullable")]
    pub emails: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub tower: String,
}
