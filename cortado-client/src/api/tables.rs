//! Dining table endpoints

use crate::{ApiClient, ClientResult};
use shared::models::{DiningTable, DiningTableCreate, TableStatus, TableStatusUpdate};

impl ApiClient {
    /// List all tables
    pub async fn list_tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.get("tables").await
    }

    /// Get a single table
    pub async fn get_table(&self, id: &str) -> ClientResult<DiningTable> {
        self.get(&format!("tables/{}", id)).await
    }

    /// List tables in a given status
    pub async fn tables_by_status(&self, status: TableStatus) -> ClientResult<Vec<DiningTable>> {
        self.get(&format!("tables/status/{}", status.as_str())).await
    }

    /// Create a table
    pub async fn create_table(&self, payload: &DiningTableCreate) -> ClientResult<DiningTable> {
        self.post("tables", payload).await
    }

    /// Change a table's status; returns the updated table
    pub async fn set_table_status(
        &self,
        id: &str,
        status: TableStatus,
    ) -> ClientResult<DiningTable> {
        self.patch(
            &format!("tables/{}/status", id),
            &TableStatusUpdate { status },
        )
        .await
    }
}
