//! 駐車スポット定義

use serde::Serialize;

use super::fee::Fee;
use super::vehicle::{Category, Vehicle, VehicleId};

/// スポット番号（1始まり）
pub type SpotNumber = usize;

/// 駐車スポット
///
/// 占有状態は `vehicle` の有無そのもの。フラグを別に持たないので
/// 「占有中 ⇔ 車両あり」が常に成り立つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    number: SpotNumber,
    vehicle: Option<Vehicle>,
}

impl ParkingSpot {
    pub fn new(number: SpotNumber) -> Self {
        Self {
            number,
            vehicle: None,
        }
    }

    pub fn number(&self) -> SpotNumber {
        self.number
    }

    pub fn is_occupied(&self) -> bool {
        self.vehicle.is_some()
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    /// 車両を駐車する。既に占有中なら車両をそのまま返す
    pub(crate) fn occupy(&mut self, vehicle: Vehicle) -> Result<(), Vehicle> {
        if self.vehicle.is_some() {
            return Err(vehicle);
        }
        self.vehicle = Some(vehicle);
        Ok(())
    }

    /// 車両を出庫させる。空きスポットなら `None`
    pub(crate) fn vacate(&mut self) -> Option<Vehicle> {
        self.vehicle.take()
    }

    pub(crate) fn holds(&self, id: &VehicleId) -> bool {
        self.vehicle.as_ref().is_some_and(|v| v.id() == id)
    }

    /// 描画用のスナップショット
    pub fn view(&self) -> SpotView {
        SpotView {
            number: self.number,
            occupied: self.is_occupied(),
            vehicle_id: self.vehicle.as_ref().map(|v| v.id().clone()),
            category: self.vehicle.as_ref().map(Vehicle::category),
            fee: self.vehicle.as_ref().map(Vehicle::fee),
        }
    }
}

/// スポットの読み取り専用スナップショット
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotView {
    pub number: SpotNumber,
    pub occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<VehicleId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
}
