//! 割り当てサービス
//!
//! スポットレジストリと車両名簿を唯一所有し、駐車・出庫を
//! 1つの作業単位として両者を同時に更新する。

use crate::error::{ParkError, Result};
use crate::model::{
    Category, FeeTable, LotSettings, Occupancy, ParkReceipt, RemoveReceipt, SpotView, Vehicle,
    VehicleId,
};
use crate::registry::SpotRegistry;
use crate::roster::VehicleRoster;
use std::collections::BTreeSet;
use tracing::{error, info, warn};

/// 駐車・出庫を調整するサービス
#[derive(Debug, Clone)]
pub struct AllocationService {
    name: String,
    fees: FeeTable,
    registry: SpotRegistry,
    roster: VehicleRoster,
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new(LotSettings::default())
    }
}

impl AllocationService {
    pub fn new(settings: LotSettings) -> Self {
        info!(
            lot = %settings.name,
            capacity = settings.capacity,
            "Initializing parking lot"
        );
        Self {
            name: settings.name,
            fees: settings.fees,
            registry: SpotRegistry::new(settings.capacity),
            roster: VehicleRoster::with_capacity(settings.capacity),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> usize {
        self.registry.capacity()
    }

    pub fn fees(&self) -> &FeeTable {
        &self.fees
    }

    /// 車両を最も番号の小さい空きスポットに駐車する
    ///
    /// 失敗時は状態を一切変更しない。
    pub fn park(&mut self, raw_id: &str, category: Category) -> Result<ParkReceipt> {
        let id = VehicleId::parse(raw_id).inspect_err(|e| warn!(error = %e, "Park rejected"))?;
        self.park_vehicle(id, category)
    }

    /// 車種を文字列で受け取って駐車する
    ///
    /// 車両番号を先に検証し、その後に車種を解釈する。
    pub fn park_str(&mut self, raw_id: &str, raw_category: &str) -> Result<ParkReceipt> {
        let id = VehicleId::parse(raw_id).inspect_err(|e| warn!(error = %e, "Park rejected"))?;
        let category = raw_category
            .parse::<Category>()
            .inspect_err(|e| warn!(vehicle = %id, error = %e, "Park rejected"))?;
        self.park_vehicle(id, category)
    }

    fn park_vehicle(&mut self, id: VehicleId, category: Category) -> Result<ParkReceipt> {
        let fee = self.fees.fee_for(category);

        if self.roster.contains(&id) {
            warn!(vehicle = %id, "Park rejected: already parked");
            return Err(ParkError::DuplicateVehicle(id.to_string()));
        }

        let Some(spot) = self.registry.find_free_spot() else {
            warn!(vehicle = %id, "Park rejected: lot is full");
            return Err(ParkError::NoCapacity);
        };

        // レジストリと名簿は同じ容量なので、空きスポットがあれば名簿にも空きがある
        if self.roster.free_slot().is_none() {
            return Err(self.violation(format!(
                "スポット {spot} は空いていますが車両名簿が満杯です"
            )));
        }

        let vehicle = Vehicle::new(id.clone(), category, fee);
        if self.registry.occupy(spot, vehicle).is_err() {
            return Err(self.violation(format!("空きスポット {spot} を占有できませんでした")));
        }
        if self.roster.insert(id.clone()).is_err() {
            self.registry.vacate(spot);
            return Err(self.violation("車両名簿への登録に失敗しました".to_string()));
        }

        info!(vehicle = %id, spot, category = %category, fee = %fee, "Vehicle parked");
        Ok(ParkReceipt {
            spot,
            vehicle_id: id,
            category,
            fee,
        })
    }

    /// 車両番号でスポットを空ける
    ///
    /// 名簿とレジストリが食い違う場合は `InternalConsistency` を返し、状態は変更しない。
    pub fn remove(&mut self, raw_id: &str) -> Result<RemoveReceipt> {
        let id =
            VehicleId::parse(raw_id).inspect_err(|e| warn!(error = %e, "Remove rejected"))?;

        let Some(index) = self.roster.index_of(&id) else {
            warn!(vehicle = %id, "Remove rejected: not parked");
            return Err(ParkError::NotFound(id.to_string()));
        };

        let Some(spot) = self.registry.find_spot_by_vehicle_id(&id) else {
            return Err(self.violation(format!(
                "車両 {id} は名簿にありますが、どのスポットにも駐車されていません"
            )));
        };

        let Some(vehicle) = self.registry.vacate(spot) else {
            return Err(self.violation(format!("スポット {spot} を空けられませんでした")));
        };
        self.roster.remove_at(index);

        info!(vehicle = %id, spot, "Vehicle removed");
        Ok(RemoveReceipt {
            spot,
            vehicle_id: id,
            category: vehicle.category(),
            fee: vehicle.fee(),
        })
    }

    /// 全スポットのスナップショット（番号順）
    pub fn list_spots(&self) -> Vec<SpotView> {
        self.registry.views()
    }

    /// 駐車中の車両を検索
    pub fn find(&self, raw_id: &str) -> Result<Option<SpotView>> {
        let id = VehicleId::parse(raw_id)?;
        Ok(self
            .registry
            .find_spot_by_vehicle_id(&id)
            .and_then(|n| self.registry.get(n))
            .map(|s| s.view()))
    }

    /// 占有状況の集計
    pub fn occupancy(&self) -> Occupancy {
        let occupied = self.registry.occupied_count();
        Occupancy {
            capacity: self.registry.capacity(),
            occupied,
            free: self.registry.capacity() - occupied,
            pending_fees: self.registry.vehicles().map(Vehicle::fee).sum(),
        }
    }

    /// 名簿の車両番号集合と占有スポットの車両番号集合が一致するか検証
    pub fn check_consistency(&self) -> Result<()> {
        let rostered: BTreeSet<&str> = self.roster.ids().map(VehicleId::as_str).collect();
        let parked: Vec<&str> = self
            .registry
            .vehicles()
            .map(|v| v.id().as_str())
            .collect();
        let parked_set: BTreeSet<&str> = parked.iter().copied().collect();

        if parked_set.len() != parked.len() {
            return Err(self.violation("同じ車両が複数のスポットに駐車されています".to_string()));
        }
        if let Some(id) = rostered.difference(&parked_set).next() {
            return Err(self.violation(format!("車両 {id} は名簿にのみ存在します")));
        }
        if let Some(id) = parked_set.difference(&rostered).next() {
            return Err(self.violation(format!("車両 {id} はスポットにのみ存在します")));
        }
        Ok(())
    }

    fn violation(&self, message: String) -> ParkError {
        error!(lot = %self.name, %message, "Internal consistency violation");
        ParkError::InternalConsistency(message)
    }
}
