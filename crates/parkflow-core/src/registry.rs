//! スポットレジストリ
//!
//! 番号順に並んだ固定数のスポットを保持し、空き検索と
//! 占有・解放の遷移だけを担う。

use crate::model::{ParkingSpot, SpotNumber, SpotView, Vehicle, VehicleId};
use tracing::debug;

/// 固定数のスポット列
#[derive(Debug, Clone)]
pub struct SpotRegistry {
    spots: Vec<ParkingSpot>,
}

impl SpotRegistry {
    /// 1..=capacity の番号で空きスポットを作成
    pub fn new(capacity: usize) -> Self {
        Self {
            spots: (1..=capacity).map(ParkingSpot::new).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.spots.len()
    }

    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    pub fn get(&self, number: SpotNumber) -> Option<&ParkingSpot> {
        number.checked_sub(1).and_then(|i| self.spots.get(i))
    }

    fn get_mut(&mut self, number: SpotNumber) -> Option<&mut ParkingSpot> {
        number.checked_sub(1).and_then(|i| self.spots.get_mut(i))
    }

    /// 番号が最も小さい空きスポット
    pub fn find_free_spot(&self) -> Option<SpotNumber> {
        let found = self
            .spots
            .iter()
            .find(|s| !s.is_occupied())
            .map(ParkingSpot::number);
        debug!(?found, "Free spot lookup");
        found
    }

    /// 車両を駐車する
    ///
    /// スポットが存在しないか占有中なら、車両をそのまま `Err` で返す。
    pub fn occupy(&mut self, number: SpotNumber, vehicle: Vehicle) -> Result<(), Vehicle> {
        match self.get_mut(number) {
            Some(spot) => spot.occupy(vehicle),
            None => Err(vehicle),
        }
    }

    /// スポットを空ける。存在しないか既に空きなら `None`
    pub fn vacate(&mut self, number: SpotNumber) -> Option<Vehicle> {
        self.get_mut(number).and_then(ParkingSpot::vacate)
    }

    /// 車両番号で占有スポットを探す
    pub fn find_spot_by_vehicle_id(&self, id: &VehicleId) -> Option<SpotNumber> {
        self.spots
            .iter()
            .find(|s| s.holds(id))
            .map(ParkingSpot::number)
    }

    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_occupied()).count()
    }

    /// 占有中スポットの車両
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.spots.iter().filter_map(ParkingSpot::vehicle)
    }

    pub fn views(&self) -> Vec<SpotView> {
        self.spots.iter().map(ParkingSpot::view).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Fee};

    fn vehicle(id: &str) -> Vehicle {
        Vehicle::new(
            VehicleId::parse(id).unwrap(),
            Category::Car,
            Fee::from_cents(500),
        )
    }

    #[test]
    fn test_new_registry_is_numbered_and_free() {
        let registry = SpotRegistry::new(20);
        assert_eq!(registry.capacity(), 20);
        assert_eq!(registry.spots()[0].number(), 1);
        assert_eq!(registry.spots()[19].number(), 20);
        assert_eq!(registry.occupied_count(), 0);
        assert_eq!(registry.find_free_spot(), Some(1));
    }

    #[test]
    fn test_find_free_spot_prefers_lowest_number() {
        let mut registry = SpotRegistry::new(5);
        registry.occupy(1, vehicle("AA")).unwrap();
        registry.occupy(3, vehicle("BB")).unwrap();
        assert_eq!(registry.find_free_spot(), Some(2));

        registry.occupy(2, vehicle("CC")).unwrap();
        assert_eq!(registry.find_free_spot(), Some(4));
    }

    #[test]
    fn test_find_free_spot_when_full() {
        let mut registry = SpotRegistry::new(2);
        registry.occupy(1, vehicle("AA")).unwrap();
        registry.occupy(2, vehicle("BB")).unwrap();
        assert_eq!(registry.find_free_spot(), None);
    }

    #[test]
    fn test_occupy_rejects_occupied_and_unknown_spot() {
        let mut registry = SpotRegistry::new(2);
        registry.occupy(1, vehicle("AA")).unwrap();

        assert!(registry.occupy(1, vehicle("BB")).is_err());
        assert!(registry.occupy(0, vehicle("BB")).is_err());
        assert!(registry.occupy(3, vehicle("BB")).is_err());
        assert_eq!(registry.occupied_count(), 1);
    }

    #[test]
    fn test_vacate() {
        let mut registry = SpotRegistry::new(2);
        registry.occupy(2, vehicle("AA")).unwrap();

        assert!(registry.vacate(1).is_none());
        assert_eq!(registry.vacate(2).unwrap().id().as_str(), "AA");
        assert!(registry.vacate(2).is_none());
        assert!(registry.vacate(9).is_none());
    }

    #[test]
    fn test_find_spot_by_vehicle_id() {
        let mut registry = SpotRegistry::new(3);
        registry.occupy(2, vehicle("AB12")).unwrap();

        let id = VehicleId::parse("AB12").unwrap();
        assert_eq!(registry.find_spot_by_vehicle_id(&id), Some(2));

        let other = VehicleId::parse("ZZ99").unwrap();
        assert_eq!(registry.find_spot_by_vehicle_id(&other), None);
    }
}
