use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    SummaryQuery, Transaction, TransactionCreate, TransactionFilter, TransactionSummary,
    TransactionUpdate,
};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn create_transaction(&self, body: &TransactionCreate) -> Result<Transaction> {
        self.post("/transactions", body).await
    }

    pub async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        self.get_query("/transactions", filter).await
    }

    pub async fn transaction_summary(&self, query: &SummaryQuery) -> Result<TransactionSummary> {
        self.get_query("/transactions/summary", query).await
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction> {
        self.get(&format!("/transactions/{id}")).await
    }

    pub async fn update_transaction(&self, id: &str, body: &TransactionUpdate) -> Result<Transaction> {
        self.put(&format!("/transactions/{id}"), body).await
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<()> {
        self.delete(&format!("/transactions/{id}")).await
    }
}
