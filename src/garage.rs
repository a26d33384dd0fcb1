//! Garage Collection
//!
//! Ordered vehicle list plus the rows still playing their exit transition.

use crate::models::{Vehicle, VehicleId, SEED_VEHICLES};

/// A removed vehicle whose row stays mounted until its exit transition ends
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    /// Position in the displayed rows when it was removed
    pub index: usize,
    pub vehicle: Vehicle,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub vehicle: Vehicle,
    pub leaving: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Garage {
    vehicles: Vec<Vehicle>,
    departing: Vec<Departure>,
}

impl Garage {
    /// Build from display labels, assigning ids 1..=n in order
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vehicles = labels
            .into_iter()
            .zip(1u32..)
            .map(|(ymm, id)| Vehicle::new(id, ymm))
            .collect();
        Self { vehicles, departing: Vec::new() }
    }

    /// Build from vehicles as given; ids are not checked for uniqueness
    #[cfg(test)]
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles, departing: Vec::new() }
    }

    pub fn seeded() -> Self {
        Self::from_labels(SEED_VEHICLES)
    }

    /// Live vehicles in order
    #[cfg(test)]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[cfg(test)]
    pub fn departing(&self) -> &[Departure] {
        &self.departing
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Remove every vehicle with this id, keeping the rest in order.
    /// Returns how many were removed (0 is a no-op).
    pub fn remove(&mut self, id: VehicleId) -> usize {
        let mut removed = Vec::new();
        for (index, row) in self.display_rows().into_iter().enumerate() {
            if !row.leaving && row.vehicle.id == id {
                removed.push(Departure { index, vehicle: row.vehicle });
            }
        }
        if removed.is_empty() {
            return 0;
        }
        self.vehicles.retain(|v| v.id != id);
        let count = removed.len();
        self.departing.extend(removed);
        count
    }

    /// Drop departed rows for this id once their exit transition has played
    pub fn finish_departure(&mut self, id: VehicleId) {
        let mut finished: Vec<usize> = self
            .departing
            .iter()
            .filter(|d| d.vehicle.id == id)
            .map(|d| d.index)
            .collect();
        if finished.is_empty() {
            return;
        }
        self.departing.retain(|d| d.vehicle.id != id);
        // Highest first so each shift sees indices that are still valid
        finished.sort_unstable_by(|a, b| b.cmp(a));
        for gone in finished {
            for d in self.departing.iter_mut().filter(|d| d.index > gone) {
                d.index -= 1;
            }
        }
    }

    /// Live rows with departing rows merged back at their old positions
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        let mut rows: Vec<DisplayRow> = self
            .vehicles
            .iter()
            .map(|v| DisplayRow { vehicle: v.clone(), leaving: false })
            .collect();

        let mut departing: Vec<&Departure> = self.departing.iter().collect();
        departing.sort_by_key(|d| d.index);
        for d in departing {
            let at = d.index.min(rows.len());
            rows.insert(at, DisplayRow { vehicle: d.vehicle.clone(), leaving: true });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(garage: &Garage) -> Vec<&str> {
        garage.vehicles().iter().map(|v| v.ymm.as_str()).collect()
    }

    fn id_of(garage: &Garage, ymm: &str) -> VehicleId {
        garage.vehicles().iter().find(|v| v.ymm == ymm).map(|v| v.id).unwrap()
    }

    #[test]
    fn test_seed_has_unique_ids() {
        let garage = Garage::seeded();
        assert_eq!(garage.len(), 15);
        let mut ids: Vec<_> = garage.vehicles().iter().map(|v| v.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 15);
        assert_eq!(garage.vehicles()[0].id, VehicleId(1));
    }

    #[test]
    fn test_remove_ford_f150_keeps_order() {
        let mut garage = Garage::seeded();
        let id = id_of(&garage, "2019 Ford F-150");

        assert_eq!(garage.remove(id), 1);

        assert_eq!(garage.len(), 14);
        let expected: Vec<&str> = SEED_VEHICLES.iter().copied().filter(|l| *l != "2019 Ford F-150").collect();
        assert_eq!(labels(&garage), expected);
    }

    #[test]
    fn test_remove_is_filter_for_every_id() {
        let seed = Garage::seeded();
        for target in seed.vehicles() {
            let mut garage = seed.clone();
            garage.remove(target.id);
            let expected: Vec<Vehicle> = seed.vehicles().iter().filter(|v| v.id != target.id).cloned().collect();
            assert_eq!(garage.vehicles(), expected.as_slice());
        }
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut once = Garage::seeded();
        once.remove(VehicleId(4));

        let mut twice = Garage::seeded();
        twice.remove(VehicleId(4));
        assert_eq!(twice.remove(VehicleId(4)), 0);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut garage = Garage::seeded();
        assert_eq!(garage.remove(VehicleId(99)), 0);
        assert_eq!(garage, Garage::seeded());
    }

    #[test]
    fn test_duplicate_ids_are_all_removed() {
        let mut garage = Garage::from_vehicles(vec![
            Vehicle::new(1, "2019 Toyota Camry"),
            Vehicle::new(2, "2019 Ford Edge"),
            Vehicle::new(1, "2019 Toyota Camry"),
        ]);

        assert_eq!(garage.remove(VehicleId(1)), 2);
        assert_eq!(labels(&garage), vec!["2019 Ford Edge"]);
        assert_eq!(garage.departing().len(), 2);
    }

    #[test]
    fn test_duplicate_labels_get_distinct_ids() {
        let mut garage = Garage::from_labels(["2019 Honda Civic", "2019 Honda Civic"]);
        garage.remove(VehicleId(1));
        assert_eq!(garage.len(), 1);
        assert_eq!(garage.vehicles()[0].id, VehicleId(2));
    }

    #[test]
    fn test_departing_row_stays_in_place() {
        let mut garage = Garage::from_labels(["A", "B", "C"]);
        garage.remove(VehicleId(2));

        let rows = garage.display_rows();
        let shown: Vec<(&str, bool)> = rows.iter().map(|r| (r.vehicle.ymm.as_str(), r.leaving)).collect();
        assert_eq!(shown, vec![("A", false), ("B", true), ("C", false)]);

        garage.finish_departure(VehicleId(2));
        assert_eq!(garage.display_rows().len(), 2);
        assert!(garage.departing().is_empty());
    }

    #[test]
    fn test_overlapping_departures_shift_on_finish() {
        let mut garage = Garage::from_labels(["A", "B", "C", "D", "E"]);
        garage.remove(VehicleId(2));
        garage.remove(VehicleId(4));

        let order: Vec<String> = garage.display_rows().into_iter().map(|r| r.vehicle.ymm).collect();
        assert_eq!(order, vec!["A", "B", "C", "D", "E"]);

        garage.finish_departure(VehicleId(2));
        let rows = garage.display_rows();
        let shown: Vec<(&str, bool)> = rows.iter().map(|r| (r.vehicle.ymm.as_str(), r.leaving)).collect();
        assert_eq!(shown, vec![("A", false), ("C", false), ("D", true), ("E", false)]);
    }

    #[test]
    fn test_empty_once_every_vehicle_removed() {
        let mut garage = Garage::from_labels(["A", "B"]);
        assert!(!garage.is_empty());
        garage.remove(VehicleId(1));
        garage.remove(VehicleId(2));
        assert!(garage.is_empty());
        assert_eq!(garage.len(), 0);
    }

    #[test]
    fn test_finish_unknown_departure_is_noop() {
        let mut garage = Garage::from_labels(["A", "B"]);
        garage.remove(VehicleId(1));
        let before = garage.clone();
        garage.finish_departure(VehicleId(7));
        assert_eq!(garage, before);
    }

    #[test]
    fn test_remove_last_row_while_others_leave() {
        let mut garage = Garage::from_labels(["A", "B"]);
        garage.remove(VehicleId(1));
        garage.remove(VehicleId(2));
        assert!(garage.is_empty());

        let order: Vec<String> = garage.display_rows().into_iter().map(|r| r.vehicle.ymm).collect();
        assert_eq!(order, vec!["A", "B"]);
    }
}
