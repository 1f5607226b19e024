//! Session context for the signed-in portal user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `RwSignal<SessionState>` at startup, fills it from the
//! [`SessionProvider`] and passes it down as a prop. Sign-out clears it. The
//! menu only reads it through [`MenuIdentity`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::SessionInfo;

/// Header shown when the profile carries no name.
pub const FALLBACK_DISPLAY_NAME: &str = "Usuário";

/// Source of the current session and the way to end it.
#[async_trait::async_trait(?Send)]
pub trait SessionProvider: Send + Sync {
    /// Who is signed in, if anyone.
    async fn current_session(&self) -> Result<Option<SessionInfo>, ApiError>;

    /// Invalidate the session. Resolves once the provider has done so.
    async fn sign_out(&self) -> Result<(), ApiError>;
}

/// Session tracked by the app shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub info: Option<SessionInfo>,
    pub loading: bool,
}

impl SessionState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Store what the provider reported. A failed lookup counts as signed out.
    pub fn finish_loading(&mut self, result: Result<Option<SessionInfo>, ApiError>) {
        self.loading = false;
        self.info = match result {
            Ok(info) => info,
            Err(err) => {
                log::warn!("session lookup failed: {err}");
                None
            }
        };
    }

    /// Drop the session after a successful sign-out.
    pub fn clear(&mut self) {
        self.info = None;
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.info.is_some()
    }
}

/// Role pill in the menu header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleBadge {
    Admin,
    User,
}

impl RoleBadge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::User => "Usuário",
        }
    }

    /// BEM modifier for the badge colour.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Admin => "user-menu__badge--admin",
            Self::User => "user-menu__badge--user",
        }
    }
}

/// Everything the menu renders about the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuIdentity {
    /// Avatar letter.
    pub initial: String,
    pub button_label: String,
    pub header_name: String,
    pub email: String,
    /// Job title, shown only when present.
    pub cargo: Option<String>,
    pub badge: RoleBadge,
    pub can_manage_users: bool,
}

impl MenuIdentity {
    #[must_use]
    pub fn from_session(info: &SessionInfo) -> Self {
        let profile = info.profile.as_ref();
        let name = profile.and_then(|p| p.nome.as_deref()).filter(|n| !n.is_empty());
        let email = info.user.email.clone();
        let initial = [name.unwrap_or_default(), email.as_str()]
            .into_iter()
            .find_map(|s| s.chars().next())
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default();
        Self {
            initial,
            button_label: name.map_or_else(|| email.clone(), str::to_owned),
            header_name: name.unwrap_or(FALLBACK_DISPLAY_NAME).to_owned(),
            cargo: profile.and_then(|p| p.cargo.clone()).filter(|c| !c.is_empty()),
            badge: if info.is_admin { RoleBadge::Admin } else { RoleBadge::User },
            can_manage_users: info.is_admin,
            email,
        }
    }
}
