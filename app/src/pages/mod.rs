pub mod about;
pub mod badges;
pub mod blog;
pub mod certificates;
pub mod cv;
pub mod home;

use leptos::prelude::*;

use crate::store;

/// The content store provided by the server.
#[cfg(feature = "ssr")]
fn content_store() -> Result<store::Store, ServerFnError> {
    use_context::<store::Store>()
        .ok_or_else(|| ServerFnError::ServerError(String::from("no content store in context")))
}

#[cfg(feature = "ssr")]
fn server_error(error: store::Error) -> ServerFnError {
    ServerFnError::ServerError(error.to_string())
}

/// Show `fallback` content instead of an error.
pub fn or_fallback<T>(
    what: &str,
    result: Result<T, ServerFnError>,
    fallback: impl FnOnce() -> T,
) -> T {
    result.unwrap_or_else(|error| {
        log::warn!("Could not load {}, showing the fallback instead: {}", what, error);
        fallback()
    })
}

#[server(prefix = "/sfn", endpoint = "profile")]
pub async fn get_profile() -> Result<store::Profile, ServerFnError> {
    content_store()?.profile().map_err(server_error)
}
