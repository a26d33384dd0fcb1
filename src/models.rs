//! Frontend Models
//!
//! Data structures for the vehicle list.

/// Synthetic key assigned when a garage is built; never derived from the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u32);

/// Vehicle data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Year / make / model, display only
    pub ymm: String,
}

impl Vehicle {
    pub fn new(id: u32, ymm: impl Into<String>) -> Self {
        Self { id: VehicleId(id), ymm: ymm.into() }
    }
}

/// Vehicles shown on every launch
pub const SEED_VEHICLES: [&str; 15] = [
    "2019 Toyota Camry",
    "2019 Honda Accord",
    "2019 Ford F-150",
    "2019 Chevrolet Silverado",
    "2019 Toyota RAV4",
    "2019 Honda CR-V",
    "2019 Ford Escape",
    "2019 Chevrolet Equinox",
    "2019 Toyota Corolla",
    "2019 Honda Civic",
    "2019 Ford Explorer",
    "2019 Chevrolet Malibu",
    "2019 Toyota Highlander",
    "2019 Honda Pilot",
    "2019 Ford Edge",
];
