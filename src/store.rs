//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::garage::{DisplayRow, Garage};
use crate::models::VehicleId;

/// Application state owning the vehicle collection
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Live vehicles plus rows still leaving
    pub garage: Garage,
}

impl AppState {
    pub fn new() -> Self {
        Self { garage: Garage::seeded() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a vehicle by ID; its row keeps rendering until the departure finishes
pub fn store_remove_vehicle(store: &AppStore, id: VehicleId) {
    let removed = store.garage().write().remove(id);
    tracing::debug!(target: "garage", id = id.0, removed, "remove");
}

/// Unmount a departed row
pub fn store_finish_departure(store: &AppStore, id: VehicleId) {
    store.garage().write().finish_departure(id);
}

/// Rows to render, in order
pub fn store_display_rows(store: &AppStore) -> Vec<DisplayRow> {
    store.garage().read().display_rows()
}

/// True once every vehicle has been removed
pub fn store_is_empty(store: &AppStore) -> bool {
    store.garage().read().is_empty()
}

/// Number of live vehicles
pub fn store_vehicle_count(store: &AppStore) -> usize {
    store.garage().read().len()
}
