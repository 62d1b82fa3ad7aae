//! Top-level view selector.
//!
//! The selector records whatever was last requested. Gating happens only when
//! resolving which screen to render: `Dashboard` without a session renders
//! the login screen while the selector itself still says `Dashboard`.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use super::auth::AuthState;

/// The fixed set of top-level screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Landing,
    Lore,
    Gallery,
    Register,
    Login,
    Dashboard,
}

impl View {
    pub const ALL: [Self; 6] = [Self::Landing, Self::Lore, Self::Gallery, Self::Register, Self::Login, Self::Dashboard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Lore => "lore",
            Self::Gallery => "gallery",
            Self::Register => "register",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }

    /// Whether rendering this view requires a session.
    #[must_use]
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Current view selector. No history, no URL sync.
#[derive(Clone, Debug, Default)]
pub struct RouterState {
    pub view: View,
}

impl RouterState {
    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            log::debug!("navigate {} -> {}", self.view.as_str(), view.as_str());
        }
        self.view = view;
    }

    /// The screen to render for the current selector and session.
    #[must_use]
    pub fn screen(&self, signed_in: bool) -> View {
        if self.view.requires_session() && !signed_in {
            View::Login
        } else {
            self.view
        }
    }

    /// Tear down the session and return to the landing screen.
    pub fn sign_out(&mut self, auth: &mut AuthState) {
        auth.clear();
        self.navigate(View::Landing);
    }
}
