use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    Budget, BudgetCreate, BudgetFilter, BudgetSummary, BudgetUpdate, Scope, ScopeQuery,
};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn create_budget(&self, body: &BudgetCreate) -> Result<Budget> {
        self.post("/budgets", body).await
    }

    pub async fn list_budgets(&self, filter: &BudgetFilter) -> Result<Vec<Budget>> {
        self.get_query("/budgets", filter).await
    }

    pub async fn get_budget(&self, id: &str) -> Result<BudgetSummary> {
        self.get(&format!("/budgets/{id}")).await
    }

    pub async fn update_budget(&self, id: &str, body: &BudgetUpdate) -> Result<Budget> {
        self.put(&format!("/budgets/{id}"), body).await
    }

    pub async fn delete_budget(&self, id: &str) -> Result<()> {
        self.delete(&format!("/budgets/{id}")).await
    }

    /// This month's active budgets with spent/percentage filled in.
    pub async fn current_budget_status(&self, scope: Scope) -> Result<Vec<Budget>> {
        self.get_query("/budgets/status/current", &ScopeQuery { scope })
            .await
    }
}
