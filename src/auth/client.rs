//! Authentication client
//!
//! Registration, password and Google login, invitation handling and the
//! current-user profile. Successful logins hand the user record and token
//! pair to the session manager, which owns them from then on.

use std::sync::Arc;

use tracing::{debug, info};

use super::models::{
    ChangePasswordRequest, GoogleLoginRequest, Invitation, InvitationRegisterRequest,
    LoginRequest, MessageResponse, ProfileUpdate, RegisterRequest, RegisterResponse,
    SessionResponse,
};
use crate::common::{safe_email_log, Result, Validator};
use crate::session::{SessionManager, User};

#[derive(Clone)]
pub struct AuthClient {
    api: Arc<SessionManager>,
}

impl AuthClient {
    pub fn new(api: Arc<SessionManager>) -> Self {
        Self { api }
    }

    /// Registers a new account. The backend acknowledges without issuing
    /// tokens; log in afterwards.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse> {
        request.validate().into_result()?;
        debug!(email = %safe_email_log(&request.email), "Registering account");
        self.api
            .post_unauthenticated("/auth/registro", &request)
            .await
    }

    /// Registers through a club invitation; the backend issues tokens right
    /// away, so the session is established in the same step.
    pub async fn register_from_invitation(
        &self,
        request: InvitationRegisterRequest,
    ) -> Result<User> {
        request.validate().into_result()?;
        let response: SessionResponse = self
            .api
            .post_unauthenticated("/auth/registrarse-desde-invitacion", &request)
            .await?;
        self.establish(response).await
    }

    /// Password login.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate().into_result()?;
        debug!(email = %safe_email_log(email), "Logging in");
        let response: SessionResponse = self
            .api
            .post_unauthenticated("/auth/login", &request)
            .await?;
        self.establish(response).await
    }

    /// Login with a Google-issued token (the backend validates it with the
    /// provider).
    pub async fn login_with_google(&self, google_token: &str) -> Result<User> {
        let response: SessionResponse = self
            .api
            .post_unauthenticated(
                "/auth/google-login",
                &GoogleLoginRequest {
                    google_token: google_token.to_string(),
                },
            )
            .await?;
        self.establish(response).await
    }

    async fn establish(&self, response: SessionResponse) -> Result<User> {
        let user = response.user.clone();
        self.api
            .login(
                response.user,
                response.tokens.access_token,
                response.tokens.refresh_token,
            )
            .await?;
        Ok(user)
    }

    /// Clears the local session. The backend keeps no server-side session
    /// state, so this never needs the network.
    pub async fn logout(&self) -> Result<()> {
        self.api.logout().await
    }

    /// Fetches the authoritative user record and refreshes the cached copy.
    pub async fn me(&self) -> Result<User> {
        let user: User = self.api.get("/auth/usuarios/me").await?;
        self.api.update_user(user.clone()).await?;
        Ok(user)
    }

    /// Updates profile fields and preferences.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<User> {
        let user: User = self.api.put("/auth/usuarios/me", &update).await?;
        self.api.update_user(user.clone()).await?;
        info!("Profile updated");
        Ok(user)
    }

    pub async fn change_password(&self, current: &str, new: &str) -> Result<MessageResponse> {
        let request = ChangePasswordRequest {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        self.api
            .post("/auth/usuarios/cambiar-contraseña", &request)
            .await
    }

    pub async fn pending_invitations(&self) -> Result<Vec<Invitation>> {
        self.api.get("/auth/invitaciones/pendientes").await
    }

    pub async fn accept_invitation(&self, token: &str) -> Result<MessageResponse> {
        self.api
            .post_empty(&format!("/auth/invitaciones/aceptar/{}", token))
            .await
    }

    pub async fn reject_invitation(&self, token: &str) -> Result<MessageResponse> {
        self.api
            .post_empty(&format!("/auth/invitaciones/rechazar/{}", token))
            .await
    }
}
