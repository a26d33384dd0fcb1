//! Delete Action Component
//!
//! Red action revealed behind a swiped card. Deletes immediately, no confirm step.

use leptos::prelude::*;

use crate::components::DeleteIcon;

/// Delete button sized to sit behind a card
///
/// # Arguments
/// * `width_px` / `height_px` - Size of the action surface
/// * `on_delete` - Callback to execute when pressed
#[component]
pub fn DeleteAction(
    width_px: f64,
    height_px: f64,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="delete-action"
            style=format!("width: {}px; height: {}px;", width_px, height_px)
        >
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                <DeleteIcon />
            </button>
        </div>
    }
}
