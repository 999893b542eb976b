use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Couple, InviteCode, InviteRequest, JoinRequest, MessageResponse};

/// Invite codes are valid for a day unless asked otherwise.
pub const DEFAULT_INVITE_HOURS: u32 = 24;

impl<S: KeyValueStore + Clone> ApiClient<S> {
    pub async fn create_invite(&self, hours_valid: u32) -> Result<InviteCode> {
        self.post("/couples/invite", &InviteRequest { hours_valid })
            .await
    }

    /// `invite_code` should already be normalized by `InviteCodeDraft`.
    pub async fn join_couple(&self, invite_code: &str) -> Result<Couple> {
        self.post("/couples/join", &JoinRequest { invite_code })
            .await
    }

    /// The caller's couple, or `None` when unpaired.
    pub async fn my_couple(&self) -> Result<Option<Couple>> {
        self.get("/couples/me").await
    }

    pub async fn leave_couple(&self) -> Result<MessageResponse> {
        self.delete_json("/couples/me").await
    }
}
