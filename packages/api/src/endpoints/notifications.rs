use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{NotificationPreferences, NotificationPreferencesUpdate};

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn notification_preferences(&self) -> Result<NotificationPreferences> {
        self.get("/notifications/preferences").await
    }

    pub async fn update_notification_preferences(
        &self,
        body: &NotificationPreferencesUpdate,
    ) -> Result<NotificationPreferences> {
        self.put("/notifications/preferences", body).await
    }
}
