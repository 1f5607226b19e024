//! Open/closed and sign-out state of the header user menu.
//!
//! DESIGN
//! ======
//! Like the content form, sign-out is split into `begin_sign_out` and
//! `finish_sign_out` so the component can drop its signal borrow while the
//! provider call is pending. The in-flight flag turns repeat clicks into
//! no-ops.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use super::session::{SessionProvider, SessionState};
use crate::net::error::ApiError;

/// How a sign-out attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOutOutcome {
    SignedOut,
    /// The provider failed; the session is kept.
    Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserMenuState {
    open: bool,
    signing_out: bool,
}

impl UserMenuState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_signing_out(&self) -> bool {
        self.signing_out
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Mark a sign-out as in flight. Returns `false` if one already is.
    pub fn begin_sign_out(&mut self) -> bool {
        if self.signing_out {
            return false;
        }
        self.signing_out = true;
        true
    }

    /// Close the menu whatever the provider answered, and tear the session
    /// down only when it succeeded.
    pub fn finish_sign_out(&mut self, result: Result<(), ApiError>, session: &mut SessionState) -> SignOutOutcome {
        self.signing_out = false;
        self.open = false;
        match result {
            Ok(()) => {
                session.clear();
                SignOutOutcome::SignedOut
            }
            Err(err) => {
                log::warn!("sign-out failed: {err}");
                SignOutOutcome::Failed
            }
        }
    }

    /// Run a full sign-out. Returns `None` when one was already in flight.
    pub async fn sign_out(
        &mut self,
        provider: &dyn SessionProvider,
        session: &mut SessionState,
    ) -> Option<SignOutOutcome> {
        if !self.begin_sign_out() {
            return None;
        }
        let result = provider.sign_out().await;
        Some(self.finish_sign_out(result, session))
    }
}
