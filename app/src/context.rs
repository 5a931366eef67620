use leptos::prelude::LeptosOptions;

use crate::store;

/// Server state shared by the Leptos routes, the server functions and the
/// JSON API.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: store::Store,
}

impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}

impl axum::extract::FromRef<Context> for store::Store {
    fn from_ref(value: &Context) -> Self {
        value.store.clone()
    }
}
