//! 料金定義

use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use super::vehicle::Category;

/// 駐車料金（セント単位で保持）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fee(u64);

impl Fee {
    pub const ZERO: Fee = Fee(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// 小数表記の金額から作成（小数第3位で丸める）
    ///
    /// 負数・NaN・無限大は `None`
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Fee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl Add for Fee {
    type Output = Fee;

    fn add(self, rhs: Fee) -> Fee {
        Fee(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Fee {
    fn sum<I: Iterator<Item = Fee>>(iter: I) -> Fee {
        iter.fold(Fee::ZERO, Add::add)
    }
}

/// 車種ごとの固定料金表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeTable {
    car: Fee,
    motorcycle: Fee,
    truck: Fee,
}

impl Default for FeeTable {
    fn default() -> Self {
        Self {
            car: Fee::from_cents(500),
            motorcycle: Fee::from_cents(300),
            truck: Fee::from_cents(800),
        }
    }
}

impl FeeTable {
    /// 車種の料金を取得
    pub fn fee_for(&self, category: Category) -> Fee {
        match category {
            Category::Car => self.car,
            Category::Motorcycle => self.motorcycle,
            Category::Truck => self.truck,
        }
    }

    /// 車種の料金を上書き
    pub fn set(&mut self, category: Category, fee: Fee) {
        match category {
            Category::Car => self.car = fee,
            Category::Motorcycle => self.motorcycle = fee,
            Category::Truck => self.truck = fee,
        }
    }

    /// 全車種の料金（表示順）
    pub fn entries(&self) -> impl Iterator<Item = (Category, Fee)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.fee_for(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_table() {
        let table = FeeTable::default();
        assert_eq!(table.fee_for(Category::Car).to_string(), "5.00");
        assert_eq!(table.fee_for(Category::Motorcycle).to_string(), "3.00");
        assert_eq!(table.fee_for(Category::Truck).to_string(), "8.00");
    }

    #[test]
    fn test_fee_from_decimal() {
        assert_eq!(Fee::from_decimal(5.0), Some(Fee::from_cents(500)));
        assert_eq!(Fee::from_decimal(2.5), Some(Fee::from_cents(250)));
        assert_eq!(Fee::from_decimal(0.1 + 0.2), Some(Fee::from_cents(30)));
        assert_eq!(Fee::from_decimal(-1.0), None);
        assert_eq!(Fee::from_decimal(f64::NAN), None);
        assert_eq!(Fee::from_decimal(f64::INFINITY), None);
    }

    #[test]
    fn test_fee_display_pads_cents() {
        assert_eq!(Fee::from_cents(1205).to_string(), "12.05");
        assert_eq!(Fee::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_fee_sum() {
        let total: Fee = [500, 300, 800].into_iter().map(Fee::from_cents).sum();
        assert_eq!(total, Fee::from_cents(1600));
    }

    #[test]
    fn test_fee_table_override() {
        let mut table = FeeTable::default();
        table.set(Category::Truck, Fee::from_cents(1000));
        assert_eq!(table.fee_for(Category::Truck).to_string(), "10.00");
        assert_eq!(table.fee_for(Category::Car).to_string(), "5.00");
    }

    #[test]
    fn test_fee_serializes_as_number() {
        let json = serde_json::to_string(&Fee::from_cents(500)).unwrap();
        assert_eq!(json, "5.0");
    }
}
