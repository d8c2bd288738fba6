//! 車両定義

use crate::error::{ParkError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::fee::Fee;

/// 最小の車両番号長
const MIN_ID_LEN: usize = 2;

/// 検証済みの車両番号
///
/// 前後の空白を除去したうえで、2文字以上の ASCII 英数字のみを受け付ける。
/// 比較は大文字小文字を区別する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct VehicleId(String);

impl VehicleId {
    /// 入力文字列を正規化して検証する
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let valid = trimmed.len() >= MIN_ID_LEN && trimmed.chars().all(|c| c.is_ascii_alphanumeric());

        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ParkError::InvalidInput(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VehicleId> for String {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}

/// 車種
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Car,
    Motorcycle,
    Truck,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Car, Category::Motorcycle, Category::Truck];

    /// 表示用の名前
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorcycle => "Motorcycle",
            Self::Truck => "Truck",
        }
    }

    /// 設定ファイル・コマンドで使うキー
    pub fn key(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Truck => "truck",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParkError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParkError::InvalidCategory(trimmed.to_string()))
    }
}

/// 駐車中の車両
///
/// 料金は作成時に車種から確定し、以後変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    id: VehicleId,
    category: Category,
    fee: Fee,
}

impl Vehicle {
    pub fn new(id: VehicleId, category: Category, fee: Fee) -> Self {
        Self { id, category, fee }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn fee(&self) -> Fee {
        self.fee
    }
}
