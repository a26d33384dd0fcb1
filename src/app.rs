//! Swipe Garage Frontend App
//!
//! Single screen: header plus the swipeable vehicle list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::VehicleList;
use crate::config::SwipeConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let config = SwipeConfig::default();

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config));

    tracing::info!(
        target: "garage",
        vehicles = store.garage().read_untracked().len(),
        threshold = config.threshold_fraction,
        "garage seeded"
    );

    view! {
        <main class="screen">
            <h1>"My Garage"</h1>
            <VehicleList />
        </main>
    }
}
