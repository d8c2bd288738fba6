//! 駐車中車両の名簿
//!
//! 固定数のスロットに車両番号を保持する。存在確認専用で、
//! 車両そのものはスポット側が所有する。

use crate::model::VehicleId;

/// 名簿が満杯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterFull;

/// 固定容量の車両番号名簿
#[derive(Debug, Clone)]
pub struct VehicleRoster {
    slots: Vec<Option<VehicleId>>,
}

impl VehicleRoster {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// 車両番号のスロット位置
    pub fn index_of(&self, id: &VehicleId) -> Option<usize> {
        self.slots.iter().position(|s| s.as_ref() == Some(id))
    }

    pub fn contains(&self, id: &VehicleId) -> bool {
        self.index_of(id).is_some()
    }

    /// 最初の空きスロット
    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// 空きスロットに登録し、その位置を返す
    pub fn insert(&mut self, id: VehicleId) -> Result<usize, RosterFull> {
        let index = self.free_slot().ok_or(RosterFull)?;
        self.slots[index] = Some(id);
        Ok(index)
    }

    /// 指定位置の登録を外す
    pub fn remove_at(&mut self, index: usize) -> Option<VehicleId> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    pub fn ids(&self) -> impl Iterator<Item = &VehicleId> {
        self.slots.iter().flatten()
    }
}
