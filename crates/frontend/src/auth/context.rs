//! Global authentication context and provider

use super::error_handler::{clear_auth_error_callback, set_auth_error_callback};
use super::store::{valid_token, LocalTokenStore, TokenStore};
use super::token::{now_unix, TokenExpiryRecord};
use crate::config::AppConfig;
use crate::services::AuthApiService;
use gloo::timers::callback::Interval;
use shopdash_http::types::{LoginResponse, UserProfile};
use std::rc::Rc;
use yew::prelude::*;

/// The signed-in session
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
    pub expiry: Option<TokenExpiryRecord>,
}

impl Session {
    /// Build a session from a login response received at `now`
    pub fn from_login(response: LoginResponse, now: i64) -> Self {
        Self {
            expiry: response
                .expires_in
                .map(|ttl| TokenExpiryRecord::from_ttl(now, ttl)),
            token: response.token,
            user: response.user,
        }
    }
}

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub session: Option<Session>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub session_expired: bool,
}

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true, // Start with loading to check localStorage
            error: None,
            session_expired: false,
        }
    }
}

/// Authentication context actions
pub enum AuthAction {
    /// Fresh login: persist and install the session
    Login(Session),
    /// Session found in storage on startup
    Restore(Session),
    SetUser(UserProfile),
    Logout,
    SetLoading(bool),
    /// Periodic expiry check
    ValidateToken,
    /// The API rejected the token
    SessionExpired,
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl AuthContextData {
    fn signed_out(error: Option<&str>) -> Rc<Self> {
        Rc::new(Self {
            session: None,
            is_loading: false,
            session_expired: error.is_some(),
            error: error.map(str::to_string),
        })
    }

    /// Apply `action`, persisting credential changes to `store`
    pub fn apply(
        self: Rc<Self>,
        action: AuthAction,
        store: &dyn TokenStore,
        now: i64,
    ) -> Rc<Self> {
        match action {
            AuthAction::Login(session) => {
                if let Err(e) = store.save(&session.token, session.expiry.as_ref()) {
                    tracing::error!("Failed to persist session: {e}");
                }
                tracing::info!(expires_at = ?session.expiry.map(|r| r.expires_at), "Signed in");

                Rc::new(Self {
                    session: Some(session),
                    is_loading: false,
                    error: None,
                    session_expired: false,
                })
            }
            AuthAction::Restore(session) => Rc::new(Self {
                session: Some(session),
                is_loading: false,
                error: None,
                session_expired: false,
            }),
            AuthAction::SetUser(user) => {
                let Some(session) = self.session.clone() else {
                    return self;
                };
                Rc::new(Self {
                    session: Some(Session {
                        user: Some(user),
                        ..session
                    }),
                    ..(*self).clone()
                })
            }
            AuthAction::Logout => {
                store.clear();
                tracing::info!("Signed out");
                Self::signed_out(None)
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
            AuthAction::ValidateToken => {
                if self.session.is_none() || valid_token(store, now).is_some() {
                    return self;
                }
                Self::signed_out(Some("Session expired. Please login again."))
            }
            AuthAction::SessionExpired => {
                store.clear();
                Self::signed_out(Some(
                    "Your session has expired. Please sign in again to continue.",
                ))
            }
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        self.apply(action, &LocalTokenStore, now_unix())
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Route 401 responses from the API layer into the reducer
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            set_auth_error_callback(Rc::new(move || {
                auth_state.dispatch(AuthAction::SessionExpired);
            }));

            clear_auth_error_callback
        });
    }

    // Load auth state from localStorage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let store = LocalTokenStore;
            match valid_token(&store, now_unix()) {
                Some(token) => {
                    let expiry = store.expiry().ok().flatten();
                    auth_state.dispatch(AuthAction::Restore(Session {
                        token,
                        user: None,
                        expiry,
                    }));
                }
                None => auth_state.dispatch(AuthAction::SetLoading(false)),
            }
        });
    }

    let token = auth_state.session.as_ref().map(|s| s.token.clone());

    // Periodic token validation while signed in
    {
        let auth_state = auth_state.clone();
        use_effect_with(token.clone(), move |token| {
            let interval = token.as_ref().map(|_| {
                Interval::new(AppConfig::TOKEN_CHECK_INTERVAL_MS, move || {
                    auth_state.dispatch(AuthAction::ValidateToken);
                })
            });
            move || drop(interval)
        });
    }

    // Fetch the profile when the session was restored without one
    {
        let auth_state = auth_state.clone();
        let needs_profile = auth_state
            .session
            .as_ref()
            .is_some_and(|s| s.user.is_none());
        use_effect_with((token, needs_profile), move |(_, needs_profile)| {
            if *needs_profile {
                wasm_bindgen_futures::spawn_local(async move {
                    match AuthApiService::new().current_user().await {
                        Ok(user) => auth_state.dispatch(AuthAction::SetUser(user)),
                        Err(e) => tracing::warn!("Failed to load profile: {e}"),
                    }
                });
            }
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current session
#[hook]
pub fn use_session() -> Option<Session> {
    let auth = use_auth();
    auth.session.clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.session.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::MemoryTokenStore;

    #[test]
    fn login_with_ttl_records_expiry() {
        let response = LoginResponse {
            token: "tok".into(),
            expires_in: Some(3600),
            user: None,
        };
        let session = Session::from_login(response, 1_000);
        assert_eq!(session.token, "tok");
        assert_eq!(
            session.expiry,
            Some(TokenExpiryRecord {
                issued_at: 1_000,
                expires_at: 4_600
            })
        );
    }

    #[test]
    fn login_without_ttl_has_no_expiry() {
        let response = LoginResponse {
            token: "tok".into(),
            expires_in: None,
            user: None,
        };
        assert_eq!(Session::from_login(response, 1_000).expiry, None);
    }

    #[test]
    fn default_state_is_loading() {
        let state = AuthContextData::default();
        assert!(state.is_loading);
        assert!(state.session.is_none());
    }

    fn signed_in(store: &MemoryTokenStore, ttl: Option<u64>) -> Rc<AuthContextData> {
        let session = Session::from_login(
            LoginResponse {
                token: "tok".into(),
                expires_in: ttl,
                user: None,
            },
            1_000,
        );
        Rc::new(AuthContextData::default()).apply(AuthAction::Login(session), store, 1_000)
    }

    #[test]
    fn login_persists_token_and_expiry() {
        let store = MemoryTokenStore::new();
        let state = signed_in(&store, Some(60));

        assert!(state.session.is_some());
        assert!(!state.is_loading);
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(
            store.expiry().unwrap(),
            Some(TokenExpiryRecord::from_ttl(1_000, 60))
        );
    }

    #[test]
    fn logout_clears_both_keys() {
        let store = MemoryTokenStore::new();
        let state = signed_in(&store, Some(60)).apply(AuthAction::Logout, &store, 1_010);

        assert!(state.session.is_none());
        assert!(!state.session_expired);
        assert!(!store.contains(AppConfig::TOKEN_KEY));
        assert!(!store.contains(AppConfig::TOKEN_EXPIRY_KEY));
    }

    #[test]
    fn rejected_token_clears_both_keys() {
        let store = MemoryTokenStore::new();
        let state = signed_in(&store, None).apply(AuthAction::SessionExpired, &store, 1_010);

        assert!(state.session.is_none());
        assert!(state.session_expired);
        assert!(state.error.is_some());
        assert!(store.token().is_none());
        assert!(!store.contains(AppConfig::TOKEN_EXPIRY_KEY));
    }

    #[test]
    fn validate_keeps_live_session() {
        let store = MemoryTokenStore::new();
        let before = signed_in(&store, Some(60));
        let after = before.clone().apply(AuthAction::ValidateToken, &store, 1_059);

        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn validate_signs_out_expired_session() {
        let store = MemoryTokenStore::new();
        let state = signed_in(&store, Some(60)).apply(AuthAction::ValidateToken, &store, 1_060);

        assert!(state.session.is_none());
        assert!(state.session_expired);
        assert!(!store.contains(AppConfig::TOKEN_KEY));
        assert!(!store.contains(AppConfig::TOKEN_EXPIRY_KEY));
    }

    #[test]
    fn validate_without_session_leaves_storage_alone() {
        let store = MemoryTokenStore::new();
        store
            .save("other", Some(&TokenExpiryRecord::from_ttl(0, 10)))
            .unwrap();

        let state = Rc::new(AuthContextData {
            is_loading: false,
            ..AuthContextData::default()
        })
        .apply(AuthAction::ValidateToken, &store, 100);

        assert!(!state.session_expired);
        assert!(store.contains(AppConfig::TOKEN_KEY));
    }
}
