//! UI Components
//!
//! Leptos components for the vehicle list.

mod icons;
mod delete_action;
mod vehicle_card;
mod vehicle_list;

pub use icons::{CarIcon, DeleteIcon};
pub use delete_action::DeleteAction;
pub use vehicle_card::VehicleCard;
pub use vehicle_list::VehicleList;
