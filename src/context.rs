//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SwipeConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: SwipeConfig,
}

impl AppContext {
    pub fn new(config: SwipeConfig) -> Self {
        Self { config }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
