//! ParkFlow の設定管理
//!
//! parking.kdl を発見・パースして駐車場の構成を得る。
//! 設定ファイルがなければ既定の構成（20スポット、標準料金）を使う。

pub mod discovery;
pub mod error;
pub mod parser;

pub use discovery::*;
pub use error::*;
pub use parser::*;

use parkflow_core::LotSettings;
use std::path::{Path, PathBuf};

/// 駐車場の構成を読み込む
///
/// `explicit` が指定されていればそのファイルを必ず読む（存在しなければエラー）。
/// 未指定なら [`find_config`] で探し、見つからなければ既定値を返す。
/// 戻り値の2番目は実際に読み込んだファイルのパス。
pub fn load_settings(explicit: Option<&Path>) -> Result<(LotSettings, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config(),
    };

    match path {
        Some(path) => {
            let settings = parse_settings_file(&path)?;
            Ok((settings, Some(path)))
        }
        None => Ok((LotSettings::default(), None)),
    }
}
