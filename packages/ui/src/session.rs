//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::client::make_session_store;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Username of the signed-in user, if any.
    pub fn username(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.user.username.clone())
    }

    /// Bearer token for authenticated API calls, if signed in.
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.token.clone())
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that restores and holds the session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Restore the persisted session on mount
    let _ = use_resource(move || async move {
        let session = make_session_store().load().await;
        if let Some(ref session) = session {
            tracing::info!("restored session for {}", session.user.username);
        }
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Record a successful login: persist the session and update the context.
pub async fn sign_in(mut state: Signal<SessionState>, session: Session) {
    make_session_store().save(&session).await;
    tracing::info!("signed in as {}", session.user.username);
    state.set(SessionState {
        session: Some(session),
        loading: false,
    });
}

/// Drop the session from storage and the context.
pub async fn sign_out(mut state: Signal<SessionState>) {
    make_session_store().clear().await;
    tracing::info!("signed out");
    state.set(SessionState {
        session: None,
        loading: false,
    });
}

/// Button to sign the current user out.
///
/// Navigation lives with the caller, so the view decides where a
/// signed-out user lands.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "logout-button".to_string())] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let state = use_session();

    let onclick = move |_| async move {
        sign_out(state).await;
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
