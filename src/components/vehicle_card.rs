//! Vehicle Card Component
//!
//! A single swipeable row: card on top, delete action underneath.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_swipe::{create_swipe_signals, make_on_pointerdown, make_on_pointermove, make_on_pointerup, SwipeEvent};

use crate::components::{CarIcon, DeleteAction};
use crate::context::use_app_context;
use crate::models::{Vehicle, VehicleId};
use crate::row::SwipeRow;

#[component]
pub fn VehicleCard(
    vehicle: Vehicle,
    /// Asks the list to remove this vehicle
    #[prop(into)] on_remove: Callback<VehicleId>,
) -> impl IntoView {
    let config = use_app_context().config;
    let id = vehicle.id;
    let row = RwSignal::new(SwipeRow::new(id, &config));
    let swipe = create_swipe_signals();

    let on_swipe = move |ev: SwipeEvent| match ev {
        SwipeEvent::Start => row.update(|r| r.drag_mut().begin()),
        SwipeEvent::Move { dx } => row.update(|r| r.drag_mut().drag_to(dx)),
        SwipeEvent::Release => {
            let settled = row.try_update(|r| r.drag_mut().release());
            tracing::trace!(target: "swipe", id = id.0, ?settled, "released");
        }
    };

    let on_delete = move |_: ()| {
        let Some(Some(removed)) = row.try_update(|r| r.press_action()) else { return };
        on_remove.run(removed);
        // Snap back on the next turn, not while the handler is still running
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            row.try_update(|r| r.run_deferred_reset());
        });
    };

    let row_class = move || {
        if row.with(|r| r.visible()) { "vehicle-row" } else { "vehicle-row leaving" }
    };
    let card_class = move || {
        if row.with(|r| r.drag().is_dragging()) { "vehicle-card dragging" } else { "vehicle-card" }
    };
    let card_style = move || format!("transform: translateX({}px);", row.with(|r| r.drag().offset()));

    let height = config.card_height_px;
    let on_pointerup = make_on_pointerup(swipe, on_swipe);

    view! {
        <div
            class=row_class
            style=format!("--row-height: {}px; --row-gap: {}px;", height, config.row_gap_px)
        >
            <div class="swipe-box" style=format!("height: {}px;", height)>
                <DeleteAction
                    width_px=config.action_width_px()
                    height_px=height
                    on_delete=on_delete
                />
                <div
                    class=card_class
                    style=card_style
                    on:pointerdown=make_on_pointerdown(swipe)
                    on:pointermove=make_on_pointermove(swipe, on_swipe)
                    on:pointerup=on_pointerup
                    on:pointercancel=on_pointerup
                >
                    <span class="vehicle-glyph"><CarIcon /></span>
                    <span class="vehicle-name">{vehicle.ymm}</span>
                </div>
            </div>
        </div>
    }
}
