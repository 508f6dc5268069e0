//! Client configuration and initialization

use crate::auth::store::{valid_token, LocalTokenStore, TokenStore};
use crate::auth::token::now_unix;
use crate::client_wrapper::WrappedAuthClient;
use crate::config::AppConfig;
use once_cell::sync::Lazy;
use shopdash_http::client::{PublicApiClient, TypedClientBuilder};
use std::sync::{Mutex, PoisonError};

pub use shopdash_http::client::ClientError;

static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicApiClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<WrappedAuthClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicApiClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(AppConfig::api_base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get a client that sends the stored bearer token, or `None` when there is
/// no usable token.
///
/// The token is re-read from storage on every call so requests always carry
/// the credentials currently persisted; an expired token is cleared here.
pub fn create_authenticated_client() -> Result<Option<WrappedAuthClient>, ClientError> {
    authenticated_client_from(&LocalTokenStore, now_unix())
}

fn authenticated_client_from(
    store: &dyn TokenStore,
    now: i64,
) -> Result<Option<WrappedAuthClient>, ClientError> {
    let mut client_lock = AUTH_CLIENT.lock().unwrap_or_else(PoisonError::into_inner);

    let Some(token) = valid_token(store, now) else {
        *client_lock = None;
        return Ok(None);
    };

    if let Some(client) = client_lock.as_ref().filter(|c| c.token() == token) {
        return Ok(Some(client.clone()));
    }

    let client = WrappedAuthClient::new(
        TypedClientBuilder::new()
            .base_url(AppConfig::api_base_url())
            .build_authenticated(token)?,
    );
    *client_lock = Some(client.clone());
    Ok(Some(client))
}
