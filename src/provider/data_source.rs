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

use std::sync::Arc;

use super::ResourceData;
use crate::errors::{Error, Result};
use crate::flatten::flatten_ticket;
use crate::network::TicketClient;
use crate::schema::{ticket_schema, Block};

pub trait DataSource: std::fmt::Debug + Send + Sync {
    /// Name under which the host refers to this data source.
    fn name(&self) -> &'static str;

    /// Attributes the data source reads and produces.
    fn schema(&self) -> Block;

    /// Fetches the remote object described by the inputs in `data` and
    /// stores its attributes there.
    ///
    /// If an error is returned, `data` is left as it was.
    fn read(&self, data: &mut ResourceData) -> Result<()>;
}

/// Read-only view of a single ticket, looked up by `id`.
#[derive(Debug)]
pub struct TicketDataSource {
    client: Arc<TicketClient>,
}

impl TicketDataSource {
    pub const NAME: &'static str = "cloudportal_datasource";

    pub fn new(client: Arc<TicketClient>) -> Self {
        Self { client }
    }
}

impl DataSource for TicketDataSource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn schema(&self) -> Block {
        ticket_schema()
    }

    fn read(&self, data: &mut ResourceData) -> Result<()> {
        let ticket_id = data
            .get_string("id")
            .ok_or_else(|| Error::MissingInput("id".to_string()))?
            .to_string();

        let ticket = self.client.get_ticket(&ticket_id)?;
        data.apply(&self.schema(), flatten_ticket(&ticket))?;
        data.set_id(ticket.id);
        Ok(())
    }
}
