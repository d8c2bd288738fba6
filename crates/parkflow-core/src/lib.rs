//! ParkFlow Core — 駐車スポット割り当て
//!
//! 固定数の駐車スポットに対する駐車・出庫を扱うコアロジック。
//!
//! # 概要
//!
//! - **SpotRegistry**: 番号順のスポット列と、占有・解放の遷移
//! - **VehicleRoster**: 駐車中の車両番号の名簿
//! - **AllocationService**: 入力検証と、上記2つを一体として更新する駐車・出庫操作

pub mod error;
pub mod model;
pub mod registry;
pub mod roster;
pub mod service;

pub use error::*;
pub use model::*;
pub use registry::SpotRegistry;
pub use roster::{RosterFull, VehicleRoster};
pub use service::AllocationService;
