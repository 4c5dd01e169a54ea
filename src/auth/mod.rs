// Session management
use leptos::{create_rw_signal, expect_context, provide_context, RwSignal, SignalSet};

use crate::types::{SessionUser, UserRole};

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "user_data";

/// Client-side session: set on login/register, cleared on logout, read-only
/// to every other consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn can_manage(&self) -> bool {
        self.role().map_or(false, |r| r.can_manage())
    }

    pub fn display_name(&self) -> String {
        match &self.user {
            Some(u) if !u.first_name.is_empty() => format!("{} {}", u.first_name, u.last_name),
            Some(u) => u.email.clone(),
            None => String::new(),
        }
    }
}

pub type SessionState = RwSignal<Session>;

/// Creates the session signal, restores any persisted session from
/// localStorage, and provides it via context.
pub fn provide_session() -> SessionState {
    let state = create_rw_signal(restore_session());
    provide_context(state);
    state
}

pub fn use_session() -> SessionState {
    expect_context::<SessionState>()
}

/// Establishes a session after a successful login or registration. The
/// signal is written in a single set so readers never observe a
/// half-updated session.
pub fn establish(state: SessionState, user: SessionUser, token: String) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &token);
        if let Ok(serialized) = serde_json::to_string(&user) {
            let _ = storage.set_item(USER_KEY, &serialized);
        }
    }
    state.set(Session {
        user: Some(user),
        token: Some(token),
    });
}

pub fn logout(state: SessionState) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    state.set(Session::default());
}

fn restore_session() -> Session {
    let Some(storage) = local_storage() else {
        return Session::default();
    };
    match (
        storage.get_item(TOKEN_KEY).ok().flatten(),
        storage.get_item(USER_KEY).ok().flatten(),
    ) {
        (Some(token), Some(user_data)) => match serde_json::from_str::<SessionUser>(&user_data) {
            Ok(user) => Session {
                user: Some(user),
                token: Some(token),
            },
            Err(_) => Session::default(),
        },
        _ => Session::default(),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
