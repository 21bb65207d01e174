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

use super::{Attribute, AttributeKind as Kind, Block};

fn strings() -> Kind {
    Kind::list_of(Kind::String)
}

fn string_map() -> Kind {
    Kind::map_of(Kind::String)
}

/// Schema of the ticket data source. `id` is the only input, everything else
/// is filled in by the read.
pub fn ticket_schema() -> Block {
    Block::new(vec![
        Attribute::required("id", Kind::String, "Unique identifier for the ticket"),
        Attribute::computed("ticketno", Kind::Int, "Ticket number"),
        Attribute::computed("title", Kind::String, "Ticket title"),
        Attribute::computed("description", Kind::String, "Ticket description"),
        Attribute::computed("status", Kind::String, "Current status of the ticket"),
        Attribute::computed("substatus", Kind::String, "Sub-status of the ticket"),
        Attribute::computed(
            "statuschangedat",
            Kind::String,
            "Timestamp when the status was last changed",
        ),
        Attribute::computed("createdat", Kind::String, "Timestamp when the ticket was created"),
        Attribute::computed(
            "createdby",
            Kind::blocks(user_schema()),
            "Details of the user who created the ticket",
        ),
        Attribute::computed(
            "changedby",
            Kind::blocks(user_schema()),
            "Details of the user who last changed the ticket",
        ),
        Attribute::computed(
            "claritycode",
            Kind::blocks(clarity_code_schema()),
            "Clarity code details",
        ),
        Attribute::computed(
            "participants",
            Kind::blocks(participant_schema()),
            "List of participants in the ticket",
        ),
        Attribute::computed(
            "comments",
            Kind::blocks(comment_schema()),
            "List of comments on the ticket",
        ),
        Attribute::computed(
            "attachments",
            Kind::blocks(attachment_schema()),
            "List of attachments for the ticket",
        ),
        Attribute::computed(
            "billingitems",
            Kind::blocks(billing_item_schema()),
            "List of billing items related to the ticket",
        ),
        Attribute::computed(
            "historyitems",
            Kind::blocks(history_item_schema()),
            "History of changes to the ticket",
        ),
        Attribute::computed(
            "validactions",
            Kind::blocks(action_schema()),
            "List of valid actions that can be performed on the ticket",
        ),
        Attribute::computed(
            "editableproperties",
            strings(),
            "List of editable properties of the ticket",
        ),
        Attribute::computed(
            "mandatoryproperties",
            strings(),
            "List of mandatory properties for the ticket",
        ),
        Attribute::computed("etag", Kind::String, "ETag for the ticket"),
        Attribute::computed("type", Kind::String, "Ticket type"),
        Attribute::computed("serviceprovider", Kind::String, "Service provider name"),
        Attribute::computed("cloudplatform", Kind::String, "Cloud platform for the ticket"),
        Attribute::computed(
            "catalogitems",
            Kind::blocks(catalog_item_schema()),
            "Catalog items associated with the ticket",
        ),
    ])
}

pub fn user_schema() -> Block {
    Block::new(vec![
        Attribute::required("email", Kind::String, "User's email address"),
        Attribute::required("userprincipalname", Kind::String, "User principal name"),
        Attribute::required("id", Kind::String, "User ID"),
        Attribute::required("displayname", Kind::String, "User's display name"),
        Attribute::required("roles", strings(), "Roles of the user"),
    ])
}

pub fn clarity_code_schema() -> Block {
    Block::new(vec![
        Attribute::required("code", Kind::String, "Clarity code"),
        Attribute::required("description", Kind::String, "Description of the clarity code"),
        Attribute::required("costcenter", Kind::String, "Cost center for the clarity code"),
        Attribute::optional(
            "emails",
            strings(),
            "List of emails related to the clarity code",
        ),
        Attribute::required("tower", Kind::String, "Tower associated with the clarity code"),
    ])
}

pub fn participant_schema() -> Block {
    Block::new(vec![
        Attribute::required(
            "userinfo",
            Kind::blocks(user_schema()),
            "The participating user",
        ),
        Attribute::required("role", Kind::String, "Role of the participant"),
    ])
}

pub fn comment_schema() -> Block {
    Block::new(vec![
        Attribute::required("id", Kind::String, "Comment ID"),
        Attribute::required("createdat", Kind::String, "Comment creation timestamp"),
        Attribute::required("modifiedat", Kind::String, "Comment modification timestamp"),
        Attribute::required(
            "author",
            Kind::blocks(user_schema()),
            "Author of the comment",
        ),
        Attribute::required("content", Kind::String, "Comment content"),
        Attribute::required(
            "loginuser",
            Kind::blocks(user_schema()),
            "User logged in when the comment was written",
        ),
        Attribute::optional("iseditable", Kind::Bool, "Whether the comment is editable"),
        Attribute::optional("iseditmode", Kind::Bool, "Whether the comment is in edit mode"),
        Attribute::optional("contentcopy", Kind::String, "A copy of the content"),
    ])
}

pub fn attachment_schema() -> Block {
    Block::new(vec![
        Attribute::required("url", Kind::String, "URL of the attachment"),
        Attribute::required(
            "uploaddatetime",
            Kind::String,
            "Upload timestamp of the attachment",
        ),
        Attribute::required(
            "uploadedby",
            Kind::blocks(user_schema()),
            "Users who uploaded the attachment",
        ),
        Attribute::required("filename", Kind::String, "Name of the attachment file"),
    ])
}

pub fn billing_item_schema() -> Block {
    Block::new(vec![
        Attribute::required("id", Kind::String, "Billing item ID"),
        Attribute::required("partitionkey", Kind::String, "Partition key for billing"),
        Attribute::required("subscriptionname", Kind::String, "Subscription name"),
        Attribute::required(
            "invoiceperiods",
            Kind::blocks(invoice_period_schema()),
            "Invoice periods for the billing item",
        ),
    ])
}

pub fn invoice_period_schema() -> Block {
    Block::new(vec![
        Attribute::required("invoiceperiod", Kind::String, "Invoice period for the item"),
        Attribute::required(
            "actualcost",
            Kind::Float,
            "Actual cost of the billing item for the period",
        ),
        Attribute::required("startdate", Kind::String, "Start date of the billing period"),
        Attribute::required("enddate", Kind::String, "End date of the billing period"),
    ])
}

pub fn history_item_schema() -> Block {
    Block::new(vec![
        Attribute::required("date", Kind::String, "Date of history item"),
        Attribute::required(
            "author",
            Kind::blocks(user_schema()),
            "Users who made the change",
        ),
        Attribute::optional(
            "changes",
            Kind::blocks(change_schema()),
            "List of changes made to the ticket",
        ),
    ])
}

pub fn change_schema() -> Block {
    Block::new(vec![
        Attribute::required("propertyname", Kind::String, "Name of the changed property"),
        Attribute::optional(
            "oldvalue",
            string_map(),
            "Old value of the changed property",
        ),
        Attribute::optional(
            "newvalue",
            string_map(),
            "New value of the changed property",
        ),
    ])
}

pub fn action_schema() -> Block {
    Block::new(vec![
        Attribute::required("actionname", Kind::String, "Name of the action"),
        Attribute::required(
            "requiredproperties",
            strings(),
            "List of required properties for the action",
        ),
        Attribute::required("type", Kind::String, "Type of action"),
        Attribute::required(
            "minnumofcatalogitems",
            Kind::Int,
            "Minimum number of catalog items for the action",
        ),
    ])
}

pub fn catalog_item_schema() -> Block {
    Block::new(vec![
        Attribute::required("name", Kind::String, "Name of the catalog item"),
        Attribute::required(
            "resourcename",
            Kind::String,
            "The resource name associated with the catalog item",
        ),
        Attribute::required("label", Kind::String, "Label for the catalog item"),
        Attribute::optional(
            "catalogitemdisclaimer",
            Kind::String,
            "Disclaimer associated with the catalog item",
        ),
        Attribute::required(
            "catalogitemcloudplatform",
            Kind::String,
            "Cloud platform associated with the catalog item (e.g., Azure)",
        ),
        Attribute::required(
            "tickettypes",
            strings(),
            "List of ticket types for this catalog item",
        ),
        Attribute::required("active", Kind::Bool, "Indicates if the catalog item is active"),
        Attribute::required("catalogitemversion", Kind::Int, "Version of the catalog item"),
        Attribute::required(
            "catalogitemcreated",
            Kind::String,
            "Creation timestamp of the catalog item",
        ),
        Attribute::required(
            "catalogitemapproved",
            Kind::String,
            "Approval timestamp of the catalog item",
        ),
        Attribute::required(
            "catalogitemapprovedby",
            Kind::String,
            "User who approved the catalog item",
        ),
        Attribute::optional(
            "catalogitemicon",
            Kind::String,
            "Icon associated with the catalog item",
        ),
        Attribute::required(
            "catalogfields",
            Kind::blocks(catalog_field_schema()),
            "List of catalog fields for the item",
        ),
        Attribute::required(
            "variables",
            string_map(),
            "Variables associated with the catalog item",
        ),
        Attribute::optional(
            "resourcecontractname",
            Kind::String,
            "Name of the resource contract associated with the catalog item",
        ),
        Attribute::optional(
            "resourcecontainername",
            Kind::String,
            "Name of the resource container for the catalog item",
        ),
    ])
}

pub fn catalog_field_schema() -> Block {
    Block::new(vec![
        Attribute::required("key", Kind::String, "Key for the catalog field"),
        Attribute::required("label", Kind::String, "Label for the catalog field"),
        Attribute::required("value", Kind::String, "Value of the catalog field"),
        Attribute::required(
            "ismandatory",
            Kind::Bool,
            "Indicates if the catalog field is mandatory",
        ),
        Attribute::optional(
            "lookupfunction",
            Kind::String,
            "Look-up function for the catalog field",
        ),
        Attribute::optional(
            "lookupvalues",
            strings(),
            "List of possible look-up values for the catalog field",
        ),
        Attribute::optional("hintvalue", Kind::String, "Hint value for the catalog field"),
        Attribute::optional(
            "inputtype",
            Kind::String,
            "Input type for the catalog field (e.g., text, number)",
        ),
        Attribute::optional("inputformat", Kind::String, "Input format for the catalog field"),
        Attribute::optional(
            "enabletoggleby",
            Kind::String,
            "Field that enables or disables this catalog field based on its value",
        ),
        Attribute::optional("disabled", Kind::String, "Indicates if the field is disabled"),
    ])
}
