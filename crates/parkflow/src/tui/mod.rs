//! TUI (Terminal User Interface) モジュール
//!
//! ratatuiを使用した駐車スポットのグリッド表示

pub mod lot;
pub mod terminal;

pub use lot::run_lot_view;
