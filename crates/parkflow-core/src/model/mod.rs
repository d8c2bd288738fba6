//! データモデル

mod fee;
mod spot;
mod vehicle;

pub use fee::*;
pub use spot::*;
pub use vehicle::*;

use serde::Serialize;

/// 既定のスポット数
pub const DEFAULT_CAPACITY: usize = 20;

/// 設定・引数で受け付けるスポット数の上限
pub const MAX_CAPACITY: usize = 1000;

/// 駐車場の構成
///
/// 容量は構築時に一度だけ決まり、以後変わらない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LotSettings {
    /// 駐車場名（表示用）
    pub name: String,

    /// スポット数
    pub capacity: usize,

    /// 車種ごとの料金
    pub fees: FeeTable,
}

impl Default for LotSettings {
    fn default() -> Self {
        Self {
            name: "Parking".to_string(),
            capacity: DEFAULT_CAPACITY,
            fees: FeeTable::default(),
        }
    }
}

/// 駐車成功時の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkReceipt {
    pub spot: SpotNumber,
    pub vehicle_id: VehicleId,
    pub category: Category,
    pub fee: Fee,
}

/// 出庫成功時の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveReceipt {
    pub spot: SpotNumber,
    pub vehicle_id: VehicleId,
    pub category: Category,
    pub fee: Fee,
}

/// 占有状況の集計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub capacity: usize,
    pub occupied: usize,
    pub free: usize,
    /// 駐車中の車両の料金合計
    pub pending_fees: Fee,
}
