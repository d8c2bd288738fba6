//! parking.kdl の探索
//!
//! 環境変数、作業ディレクトリの祖先、ユーザー設定ディレクトリの順に見る。

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 駐車場設定ファイル名
pub const CONFIG_FILENAME: &str = "parking.kdl";

/// 設定ファイルパスの環境変数
pub const CONFIG_PATH_ENV: &str = "PARKFLOW_CONFIG_PATH";

/// ParkFlowのグローバル設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("parkflow"))
        .ok_or(ConfigError::ConfigDirNotFound)
}

/// 駐車場設定の置き場所を決める
///
/// 優先順位:
/// 1. PARKFLOW_CONFIG_PATH が指すファイル
/// 2. カレントディレクトリとその祖先にある parking.kdl
/// 3. ユーザー設定ディレクトリの parkflow/parking.kdl
///
/// どこにもなければ None。呼び出し側は既定値で駐車場を開く。
#[tracing::instrument]
pub fn find_config() -> Option<PathBuf> {
    if let Some(path) = config_from_env() {
        return Some(path);
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_from(&cwd)
    {
        return Some(path);
    }

    let global = get_config_dir().ok()?.join(CONFIG_FILENAME);
    if global.is_file() {
        info!(path = %global.display(), "Using lot settings from user config dir");
        return Some(global);
    }

    debug!("No parking.kdl anywhere, lot opens with defaults");
    None
}

fn config_from_env() -> Option<PathBuf> {
    let path = PathBuf::from(std::env::var_os(CONFIG_PATH_ENV)?);
    if path.is_file() {
        info!(path = %path.display(), "Using lot settings named by {}", CONFIG_PATH_ENV);
        Some(path)
    } else {
        // 指定先がなくても探索は続ける
        warn!(path = %path.display(), "{} points at no file, ignoring it", CONFIG_PATH_ENV);
        None
    }
}

/// `start_dir` から祖先方向に parking.kdl を探す
pub fn find_config_from(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => info!(path = %path.display(), "Using lot settings found above working dir"),
        None => debug!(from = %start_dir.display(), "No parking.kdl above this directory"),
    }
    found
}
