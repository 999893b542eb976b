use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    ExecuteResult, RecurringCreate, RecurringFilter, RecurringTransaction, RecurringUpdate,
};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn create_recurring(&self, body: &RecurringCreate) -> Result<RecurringTransaction> {
        self.post("/recurring", body).await
    }

    pub async fn list_recurring(&self, filter: &RecurringFilter) -> Result<Vec<RecurringTransaction>> {
        self.get_query("/recurring", filter).await
    }

    pub async fn get_recurring(&self, id: &str) -> Result<RecurringTransaction> {
        self.get(&format!("/recurring/{id}")).await
    }

    pub async fn update_recurring(
        &self,
        id: &str,
        body: &RecurringUpdate,
    ) -> Result<RecurringTransaction> {
        self.put(&format!("/recurring/{id}"), body).await
    }

    pub async fn delete_recurring(&self, id: &str) -> Result<()> {
        self.delete(&format!("/recurring/{id}")).await
    }

    /// Materializes one transaction from the template right now.
    pub async fn execute_recurring(&self, id: &str) -> Result<ExecuteResult> {
        self.post_empty(&format!("/recurring/{id}/execute")).await
    }
}
