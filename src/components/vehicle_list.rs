//! Vehicle List Component
//!
//! Renders the garage and removes rows on delete. A removed row stays
//! mounted, marked as leaving, until its exit transition has played.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::VehicleCard;
use crate::context::use_app_context;
use crate::models::VehicleId;
use crate::store::{store_display_rows, store_finish_departure, store_is_empty, store_remove_vehicle, store_vehicle_count, use_app_store};

#[component]
pub fn VehicleList() -> impl IntoView {
    let store = use_app_store();
    let exit_ms = use_app_context().config.exit_transition_ms;

    let on_remove = Callback::new(move |id: VehicleId| {
        store_remove_vehicle(&store, id);
        spawn_local(async move {
            TimeoutFuture::new(exit_ms).await;
            store_finish_departure(&store, id);
            tracing::debug!(target: "garage", id = id.0, "row unmounted");
        });
    });

    view! {
        <div class="vehicle-list">
            <For
                each=move || store_display_rows(&store)
                key=|row| row.vehicle.id
                children=move |row| {
                    view! { <VehicleCard vehicle=row.vehicle on_remove=on_remove /> }
                }
            />
        </div>
        <Show when=move || store_is_empty(&store)>
            <p class="empty-garage">"No vehicles left"</p>
        </Show>
        <p class="item-count">{move || format!("{} vehicles", store_vehicle_count(&store))}</p>
    }
}
