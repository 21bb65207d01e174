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

//! Conversion of the nested [`Ticket`] into the flat attribute shape declared
//! in [`crate::schema::ticket_schema`].
//!
//! Every record becomes one [`AttributeMap`] whose keys are exactly the
//! attribute names of its block. Collections keep their length and order,
//! singular nested records become a one-element list.

use std::collections::BTreeMap;

use crate::network::models::{
    Action, Attachment, BillingItem, CatalogField, CatalogItem, Change, ClarityCode, Comment,
    HistoryItem, InvoicePeriod, Participant, Ticket, User,
};
use crate::value::{AttributeMap, AttributeValue};

/// A record that can be represented as one flat attribute map.
pub trait Flatten {
    fn flatten(&self) -> AttributeMap;
}

/// Flattens every record of `items`, preserving order. An empty input gives
/// an empty list.
pub fn flatten_list<T: Flatten>(items: &[T]) -> AttributeValue {
    AttributeValue::List(items.iter().map(|i| i.flatten().into()).collect())
}

/// A singular nested record, represented as a list holding one block.
pub fn flatten_one<T: Flatten>(item: &T) -> AttributeValue {
    AttributeValue::List(vec![item.flatten().into()])
}

pub fn flatten_string_list(items: &[String]) -> AttributeValue {
    AttributeValue::List(items.iter().map(|s| s.as_str().into()).collect())
}

/// String maps already have the shape of a map attribute.
pub fn flatten_string_map(map: &BTreeMap<String, String>) -> AttributeValue {
    AttributeValue::Map(
        map.iter()
            .map(|(k, v)| (k.clone(), v.as_str().into()))
            .collect(),
    )
}

/// Turns the label-keyed invoice periods into a list ordered by label, with
/// the label stored in each entry's `invoiceperiod`.
pub fn flatten_invoice_periods(periods: &BTreeMap<String, InvoicePeriod>) -> AttributeValue {
    AttributeValue::List(
        periods
            .iter()
            .map(|(label, period)| flatten_invoice_period(label, period).into())
            .collect(),
    )
}

fn flatten_invoice_period(label: &str, period: &InvoicePeriod) -> AttributeMap {
    attributes([
        ("invoiceperiod", label.into()),
        ("actualcost", period.actualcost.into()),
        ("startdate", period.startdate.as_str().into()),
        ("enddate", period.enddate.as_str().into()),
    ])
}

fn attributes<const N: usize>(entries: [(&str, AttributeValue); N]) -> AttributeMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn text(value: &str) -> AttributeValue {
    value.into()
}

fn optional_text(value: &Option<String>) -> AttributeValue {
    value.clone().into()
}

/// Flattens the whole ticket into the attribute set of the data source.
pub fn flatten_ticket(ticket: &Ticket) -> AttributeMap {
    ticket.flatten()
}

impl Flatten for Ticket {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("id", text(&self.id)),
            ("ticketno", self.ticketno.into()),
            ("title", text(&self.title)),
            ("description", text(&self.description)),
            ("status", text(&self.status)),
            ("substatus", text(&self.substatus)),
            ("statuschangedat", text(&self.statuschangedat)),
            ("createdat", text(&self.createdat)),
            ("createdby", flatten_one(&self.createdby)),
            ("changedby", flatten_one(&self.changedby)),
            ("claritycode", flatten_one(&self.claritycode)),
            ("participants", flatten_list(&self.participants)),
            ("comments", flatten_list(&self.comments)),
            ("attachments", flatten_list(&self.attachments)),
            ("billingitems", flatten_list(&self.billingitems)),
            ("historyitems", flatten_list(&self.historyitems)),
            ("validactions", flatten_list(&self.validactions)),
            (
                "editableproperties",
                flatten_string_list(&self.editableproperties),
            ),
            (
                "mandatoryproperties",
                flatten_string_list(&self.mandatoryproperties),
            ),
            ("etag", text(&self.etag)),
            ("type", text(&self.r#type)),
            ("serviceprovider", text(&self.serviceprovider)),
            ("cloudplatform", text(&self.cloudplatform)),
            ("catalogitems", flatten_list(&self.catalogitems)),
        ])
    }
}

impl Flatten for User {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("email", text(&self.email)),
            ("userprincipalname", text(&self.userprincipalname)),
            ("id", text(&self.id)),
            ("displayname", text(&self.displayname)),
            ("roles", flatten_string_list(&self.roles)),
        ])
    }
}

impl Flatten for ClarityCode {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("code", text(&self.code)),
            ("description", text(&self.description)),
            ("costcenter", text(&self.costcenter)),
            ("emails", flatten_string_list(&self.emails)),
            ("tower", text(&self.tower)),
        ])
    }
}

impl Flatten for Participant {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("userinfo", flatten_one(&self.userinfo)),
            ("role", text(&self.role)),
        ])
    }
}

impl Flatten for Comment {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("id", text(&self.id)),
            ("createdat", text(&self.createdat)),
            ("modifiedat", text(&self.modifiedat)),
            ("author", flatten_one(&self.author)),
            ("content", text(&self.content)),
            ("loginuser", flatten_one(&self.loginuser)),
            ("iseditable", self.iseditable.into()),
            ("iseditmode", self.iseditmode.into()),
            ("contentcopy", text(&self.contentcopy)),
        ])
    }
}

impl Flatten for Attachment {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("url", text(&self.url)),
            ("uploaddatetime", text(&self.uploaddatetime)),
            ("uploadedby", flatten_list(&self.uploadedby)),
            ("filename", text(&self.filename)),
        ])
    }
}

impl Flatten for BillingItem {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("id", text(&self.id)),
            ("partitionkey", text(&self.partitionkey)),
            ("subscriptionname", text(&self.subscriptionname)),
            (
                "invoiceperiods",
                flatten_invoice_periods(&self.invoiceperiods),
            ),
        ])
    }
}

impl Flatten for HistoryItem {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("date", text(&self.date)),
            ("author", flatten_list(&self.author)),
            ("changes", flatten_list(&self.changes)),
        ])
    }
}

impl Flatten for Change {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("propertyname", text(&self.propertyname)),
            ("oldvalue", flatten_string_map(&self.oldvalue)),
            ("newvalue", flatten_string_map(&self.newvalue)),
        ])
    }
}

impl Flatten for Action {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("actionname", text(&self.actionname)),
            (
                "requiredproperties",
                flatten_string_list(&self.requiredproperties),
            ),
            ("type", text(&self.r#type)),
            ("minnumofcatalogitems", self.minnumofcatalogitems.into()),
        ])
    }
}

impl Flatten for CatalogItem {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("name", text(&self.name)),
            ("resourcename", text(&self.resourcename)),
            ("label", text(&self.label)),
            (
                "catalogitemdisclaimer",
                optional_text(&self.catalogitemdisclaimer),
            ),
            (
                "catalogitemcloudplatform",
                text(&self.catalogitemcloudplatform),
            ),
            ("tickettypes", flatten_string_list(&self.tickettypes)),
            ("active", self.active.into()),
            ("catalogitemversion", self.catalogitemversion.into()),
            ("catalogitemcreated", text(&self.catalogitemcreated)),
            ("catalogitemapproved", text(&self.catalogitemapproved)),
            ("catalogitemapprovedby", text(&self.catalogitemapprovedby)),
            ("catalogitemicon", optional_text(&self.catalogitemicon)),
            ("catalogfields", flatten_list(&self.catalogfields)),
            ("variables", flatten_string_map(&self.variables)),
            (
                "resourcecontractname",
                optional_text(&self.resourcecontractname),
            ),
            (
                "resourcecontainername",
                optional_text(&self.resourcecontainername),
            ),
        ])
    }
}

impl Flatten for CatalogField {
    fn flatten(&self) -> AttributeMap {
        attributes([
            ("key", text(&self.key)),
            ("label", text(&self.label)),
            ("value", text(&self.value)),
            ("ismandatory", self.ismandatory.into()),
            ("lookupfunction", optional_text(&self.lookupfunction)),
            ("lookupvalues", flatten_string_list(&self.lookupvalues)),
            ("hintvalue", optional_text(&self.hintvalue)),
            ("inputtype", optional_text(&self.inputtype)),
            ("inputformat", optional_text(&self.inputformat)),
            ("enabletoggleby", optional_text(&self.enabletoggleby)),
            ("disabled", optional_text(&self.disabled)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::models::tests::{example_ticket, user_ada};
    use crate::schema::{
        catalog_field_schema, catalog_item_schema, comment_schema, ticket_schema, user_schema,
        Block,
    };
    use rstest::rstest;

    fn keys(map: &AttributeMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    fn sorted_names(block: &Block) -> Vec<&'static str> {
        let mut names = block.attribute_names();
        names.sort_unstable();
        names
    }

    #[test]
    fn test_empty_collections_are_empty_lists() {
        let ticket = Ticket::default();
        let flat = flatten_ticket(&ticket);

        for name in [
            "participants",
            "comments",
            "attachments",
            "billingitems",
            "historyitems",
            "validactions",
            "catalogitems",
            "editableproperties",
        ] {
            assert_eq!(flat[name], AttributeValue::List(Vec::new()), "{name}");
        }
        assert_eq!(
            flatten_invoice_periods(&BTreeMap::new()),
            AttributeValue::List(Vec::new())
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let comments: Vec<Comment> = ["c-3", "c-1", "c-2"]
            .iter()
            .map(|id| Comment {
                id: id.to_string(),
                ..Default::default()
            })
            .collect();

        let flat = flatten_list(&comments);
        let ids: Vec<&str> = flat
            .as_list()
            .unwrap()
            .iter()
            .map(|c| c.as_object().unwrap()["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["c-3", "c-1", "c-2"]);
    }

    #[test]
    fn test_invoice_period_label_is_reattached() {
        let periods = BTreeMap::from([(
            "Jan-2024".to_string(),
            InvoicePeriod {
                invoiceperiod: String::new(),
                actualcost: 100.5,
                startdate: "2024-01-01".to_string(),
                enddate: "2024-01-31".to_string(),
            },
        )]);

        let flat = flatten_invoice_periods(&periods);
        let entries = flat.as_list().unwrap();
        assert_eq!(entries.len(), 1);

        let entry = entries[0].as_object().unwrap();
        assert_eq!(entry["invoiceperiod"].as_str(), Some("Jan-2024"));
        assert_eq!(entry["actualcost"].as_f64(), Some(100.5));
        assert_eq!(entry["startdate"].as_str(), Some("2024-01-01"));
        assert_eq!(entry["enddate"].as_str(), Some("2024-01-31"));
    }

    #[test]
    fn test_invoice_periods_are_ordered_by_label() {
        let periods: BTreeMap<String, InvoicePeriod> = ["2024-03", "2024-01", "2024-02"]
            .iter()
            .map(|label| (label.to_string(), InvoicePeriod::default()))
            .collect();

        let flat = flatten_invoice_periods(&periods);
        let labels: Vec<&str> = flat
            .as_list()
            .unwrap()
            .iter()
            .map(|p| p.as_object().unwrap()["invoiceperiod"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[rstest]
    fn test_user_scalars_survive(user_ada: User) {
        let flat = user_ada.flatten();
        assert_eq!(keys(&flat), sorted_names(&user_schema()));
        assert_eq!(flat["id"].as_str(), Some("u-001"));
        assert_eq!(flat["email"].as_str(), Some("ada.lovelace@example.com"));
        assert_eq!(
            flat["userprincipalname"].as_str(),
            Some("ada.lovelace@example.onmicrosoft.com")
        );
        assert_eq!(flat["displayname"].as_str(), Some("Ada Lovelace"));
        assert_eq!(
            flat["roles"],
            AttributeValue::List(vec!["Requester".into()])
        );
    }

    #[rstest]
    fn test_comment_nests_users(example_ticket: Ticket) {
        let flat = example_ticket.comments[0].flatten();
        assert_eq!(keys(&flat), sorted_names(&comment_schema()));

        let author = flat["author"].as_list().unwrap();
        assert_eq!(author.len(), 1);
        assert_eq!(
            author[0].as_object().unwrap()["displayname"].as_str(),
            Some("Ada Lovelace")
        );
        assert_eq!(flat["iseditable"].as_bool(), Some(true));
        assert_eq!(flat["iseditmode"].as_bool(), Some(false));
    }

    #[rstest]
    fn test_absent_optionals_are_null(example_ticket: Ticket) {
        let item = example_ticket.catalogitems[0].flatten();
        assert_eq!(keys(&item), sorted_names(&catalog_item_schema()));
        assert!(item["catalogitemicon"].is_null());
        assert!(item["resourcecontractname"].is_null());
        assert_eq!(
            item["catalogitemdisclaimer"].as_str(),
            Some("Data is replicated within the region only.")
        );
        assert_eq!(item["catalogitemversion"].as_i64(), Some(3));
        assert_eq!(
            item["variables"].as_map().unwrap()["location"].as_str(),
            Some("westeurope")
        );

        let field = example_ticket.catalogitems[0].catalogfields[0].flatten();
        assert_eq!(keys(&field), sorted_names(&catalog_field_schema()));
        assert!(field["hintvalue"].is_null());
        assert_eq!(field["inputtype"].as_str(), Some("select"));
    }

    #[rstest]
    fn test_change_maps_pass_through(example_ticket: Ticket) {
        let flat = example_ticket.historyitems[0].flatten();
        let change = flat["changes"].as_list().unwrap()[0].as_object().unwrap();
        assert_eq!(change["propertyname"].as_str(), Some("status"));
        assert_eq!(
            change["oldvalue"],
            AttributeValue::Map(BTreeMap::from([("value".to_string(), "New".into())]))
        );
        assert_eq!(
            change["newvalue"],
            AttributeValue::Map(BTreeMap::from([(
                "value".to_string(),
                "InProgress".into()
            )]))
        );
    }

    #[rstest]
    fn test_flattened_ticket_conforms_to_schema(example_ticket: Ticket) {
        let flat = flatten_ticket(&example_ticket);
        let schema = ticket_schema();
        assert_eq!(keys(&flat), sorted_names(&schema));
        assert_eq!(schema.validate(&flat), Ok(()));

        assert_eq!(flat["ticketno"].as_i64(), Some(10234));
        assert_eq!(flat["type"].as_str(), Some("ServiceRequest"));
        let billing = flat["billingitems"].as_list().unwrap()[0]
            .as_object()
            .unwrap();
        let periods = billing["invoiceperiods"].as_list().unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(
            periods[1].as_object().unwrap()["actualcost"].as_f64(),
            Some(100.5)
        );
    }

    #[test]
    fn test_default_ticket_conforms_to_schema() {
        let flat = flatten_ticket(&Ticket::default());
        assert_eq!(ticket_schema().validate(&flat), Ok(()));
    }
}
