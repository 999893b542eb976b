use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    AdminStats, AdminTransactionQuery, AdminUser, AdminUserUpdate, CoupleListResponse,
    MessageResponse, Page, TransactionListResponse, UserListQuery, UserListResponse,
};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn admin_stats(&self) -> Result<AdminStats> {
        self.get("/admin/stats").await
    }

    pub async fn admin_users(&self, query: &UserListQuery) -> Result<UserListResponse> {
        self.get_query("/admin/users", query).await
    }

    pub async fn admin_user(&self, id: &str) -> Result<AdminUser> {
        self.get(&format!("/admin/users/{id}")).await
    }

    pub async fn admin_update_user(&self, id: &str, body: &AdminUserUpdate) -> Result<AdminUser> {
        self.put(&format!("/admin/users/{id}"), body).await
    }

    pub async fn admin_delete_user(&self, id: &str) -> Result<MessageResponse> {
        self.delete_json(&format!("/admin/users/{id}")).await
    }

    pub async fn admin_couples(&self, page: Page) -> Result<CoupleListResponse> {
        self.get_query("/admin/couples", &page).await
    }

    pub async fn admin_transactions(
        &self,
        query: &AdminTransactionQuery,
    ) -> Result<TransactionListResponse> {
        self.get_query("/admin/transactions", query).await
    }
}
