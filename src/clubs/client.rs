//! Club client
//!
//! Club CRUD plus the members screen: listing, invitations, removal and role
//! changes. Club creation is a superadmin operation; the backend enforces
//! that and the client surfaces its 403 verbatim.

use std::sync::Arc;

use tracing::info;

use super::models::{
    Club, ClubCreate, ClubInvitation, ClubUpdate, Member, MemberInvite, MemberInviteResponse,
    MessageResponse, RoleResponse, RoleUpdate, RoleUpdateResponse,
};
use super::validators::validate_role;
use crate::common::{ApiError, Result, Validator};
use crate::session::SessionManager;

#[derive(Clone)]
pub struct ClubsClient {
    api: Arc<SessionManager>,
}

impl ClubsClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    pub async fn create(&self, request: ClubCreate) -> Result<Club> {
        request.validate().into_result()?;
        let club: Club = self.api.post("/clubes", &request).await?;
        info!(club_id = club.id, "Club created");
        Ok(club)
    }

    /// Clubs the current user belongs to.
    pub async fn list_mine(&self) -> Result<Vec<Club>> {
        self.api.get("/clubes").await
    }

    pub async fn get(&self, club_id: i64) -> Result<Club> {
        self.api.get(&format!("/clubes/{}", club_id)).await
    }

    pub async fn update(&self, club_id: i64, update: ClubUpdate) -> Result<Club> {
        self.api.put(&format!("/clubes/{}", club_id), &update).await
    }

    /// The caller's role in the club; superadmins without a membership read
    /// back as administrators.
    pub async fn my_role(&self, club_id: i64) -> Result<String> {
        let response: RoleResponse = self.api.get(&format!("/clubes/mi-rol/{}", club_id)).await?;
        Ok(response.role)
    }

    pub async fn members(&self, club_id: i64) -> Result<Vec<Member>> {
        self.api.get(&format!("/clubes/{}/miembros", club_id)).await
    }

    pub async fn invite_member(
        &self,
        club_id: i64,
        invite: MemberInvite,
    ) -> Result<MemberInviteResponse> {
        invite.validate().into_result()?;
        let response: MemberInviteResponse = self
            .api
            .post(&format!("/clubes/{}/miembros/invitar", club_id), &invite)
            .await?;
        info!(club_id, "Member invitation created");
        Ok(response)
    }

    pub async fn invitations(&self, club_id: i64) -> Result<Vec<ClubInvitation>> {
        self.api
            .get(&format!("/clubes/{}/miembros/invitaciones", club_id))
            .await
    }

    /// Removal marks the membership inactive server-side; the member
    /// disappears from listings but history is kept.
    pub async fn remove_member(&self, club_id: i64, user_id: i64) -> Result<MessageResponse> {
        self.api
            .delete(&format!("/clubes/{}/miembros/{}", club_id, user_id))
            .await
    }

    pub async fn set_member_role(
        &self,
        club_id: i64,
        user_id: i64,
        role: &str,
    ) -> Result<RoleUpdateResponse> {
        let normalized = validate_role(role).map_err(ApiError::Validation)?;
        self.api
            .put(
                &format!("/clubes/{}/miembros/{}/rol", club_id, user_id),
                &RoleUpdate { role: normalized },
            )
            .await
    }
}
