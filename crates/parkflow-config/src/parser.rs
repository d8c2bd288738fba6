//! parking.kdl パーサー
//!
//! 駐車場名・容量・車種ごとの料金を読み取り、LotSettings を生成する。
//! 記述のない項目は既定値のまま。

use crate::error::{ConfigError, Result};
use kdl::{KdlDocument, KdlNode, KdlValue};
use parkflow_core::{Category, Fee, LotSettings, MAX_CAPACITY};
use std::path::Path;
use tracing::debug;

/// KDLファイルを LotSettings にパース
pub fn parse_settings_file(path: &Path) -> Result<LotSettings> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// KDL文字列を LotSettings にパース
pub fn parse_settings(content: &str) -> Result<LotSettings> {
    let doc: KdlDocument = content.parse()?;

    let mut settings = LotSettings::default();

    for node in doc.nodes() {
        match node.name().value() {
            "lot" => {
                let name = first_string(node)
                    .ok_or_else(|| ConfigError::InvalidConfig("lot には名前が必要です".to_string()))?;
                if name.trim().is_empty() {
                    return Err(ConfigError::InvalidConfig(
                        "lot の名前が空です".to_string(),
                    ));
                }
                settings.name = name.to_string();
            }
            "capacity" => {
                settings.capacity = parse_capacity(node)?;
            }
            "fees" => {
                if let Some(children) = node.children() {
                    for child in children.nodes() {
                        let (category, fee) = parse_fee(child)?;
                        settings.fees.set(category, fee);
                    }
                }
            }
            other => {
                // 不明なノードはスキップ
                debug!(node = other, "Skipping unknown node");
            }
        }
    }

    Ok(settings)
}

fn first_string(node: &KdlNode) -> Option<&str> {
    node.entries().first().and_then(|e| e.value().as_string())
}

/// capacity ノードをパース
fn parse_capacity(node: &KdlNode) -> Result<usize> {
    let value = node
        .entries()
        .first()
        .and_then(|e| e.value().as_integer())
        .ok_or_else(|| {
            ConfigError::InvalidConfig("capacity には整数を指定してください".to_string())
        })?;

    match usize::try_from(value) {
        Ok(capacity) if (1..=MAX_CAPACITY).contains(&capacity) => Ok(capacity),
        _ => Err(ConfigError::InvalidConfig(format!(
            "capacity は1以上{MAX_CAPACITY}以下である必要があります: {value}"
        ))),
    }
}

/// fees 配下の `<category> <amount>` ノードをパース
fn parse_fee(node: &KdlNode) -> Result<(Category, Fee)> {
    let key = node.name().value();
    let category = key
        .parse::<Category>()
        .map_err(|_| ConfigError::InvalidConfig(format!("不明な車種の料金です: {key}")))?;

    let value = node.entries().first().map(|e| e.value()).ok_or_else(|| {
        ConfigError::InvalidConfig(format!("{key} の料金が指定されていません"))
    })?;

    let fee = fee_from_value(value)
        .ok_or_else(|| ConfigError::InvalidConfig(format!("{key} の料金が不正です: {value}")))?;

    Ok((category, fee))
}

fn fee_from_value(value: &KdlValue) -> Option<Fee> {
    if let Some(amount) = value.as_float() {
        return Fee::from_decimal(amount);
    }
    let amount = value.as_integer()?;
    let cents = u64::try_from(amount).ok()?.checked_mul(100)?;
    Some(Fee::from_cents(cents))
}
