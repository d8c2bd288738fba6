//! コマンドセッション
//!
//! シェル・スクリプト実行・TUI で共通の1行コマンドを解釈し、
//! AllocationService に対して実行する。

use parkflow_core::{
    AllocationService, Category, Fee, Occupancy, ParkError, ParkReceipt, RemoveReceipt, SpotView,
};
use std::str::FromStr;

const PARK_USAGE: &str = "park <車両番号> <car|motorcycle|truck>";
const REMOVE_USAGE: &str = "remove <車両番号>";
const FIND_USAGE: &str = "find <車両番号>";
const LIST_USAGE: &str = "list [--json]";

pub const HELP_TEXT: &str = "\
コマンド:
  park <車両番号> <car|motorcycle|truck>  車両を駐車
  remove <車両番号>                       車両を出庫
  find <車両番号>                         駐車中のスポットを検索
  list [--json]                           スポット一覧を表示
  status                                  使用状況を表示
  fees                                    料金表を表示
  help                                    このヘルプを表示
  quit                                    終了";

/// セッションのエラー
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("不明なコマンドです: '{0}' (help で一覧を表示)")]
    UnknownCommand(String),

    #[error("使い方: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Park(#[from] ParkError),

    #[error("JSON 出力エラー: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    /// 処理を継続すべきでないエラーかどうか
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Park(e) if !e.is_recoverable())
    }
}

/// 1行分のコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Park { id: String, category: String },
    Remove { id: String },
    Find { id: String },
    List { json: bool },
    Status,
    Fees,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, SessionError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(SessionError::UnknownCommand(String::new()));
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("park", [id, category]) => Command::Park {
                id: id.to_string(),
                category: category.to_string(),
            },
            ("park", _) => return Err(SessionError::Usage(PARK_USAGE)),
            ("remove", [id]) => Command::Remove { id: id.to_string() },
            ("remove", _) => return Err(SessionError::Usage(REMOVE_USAGE)),
            ("find", [id]) => Command::Find { id: id.to_string() },
            ("find", _) => return Err(SessionError::Usage(FIND_USAGE)),
            ("list", []) => Command::List { json: false },
            ("list", ["--json"]) => Command::List { json: true },
            ("list", _) => return Err(SessionError::Usage(LIST_USAGE)),
            ("status", []) => Command::Status,
            ("fees", []) => Command::Fees,
            ("help", _) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(SessionError::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

/// コマンドの実行結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Parked(ParkReceipt),
    Removed(RemoveReceipt),
    Found { id: String, spot: Option<SpotView> },
    Spots(Vec<SpotView>),
    Json(String),
    Status { lot: String, occupancy: Occupancy },
    Fees(Vec<(Category, Fee)>),
    Help,
    Quit,
}

impl Outcome {
    /// 1行の要約メッセージ
    pub fn summary(&self) -> String {
        match self {
            Self::Parked(r) => format!(
                "車両 {} をスポット {} に駐車しました ({}, 料金 ${})",
                r.vehicle_id, r.spot, r.category, r.fee
            ),
            Self::Removed(r) => format!(
                "車両 {} をスポット {} から出庫しました (料金 ${})",
                r.vehicle_id, r.spot, r.fee
            ),
            Self::Found { id, spot: Some(s) } => format!(
                "車両 {} はスポット {} に駐車中です",
                id, s.number
            ),
            Self::Found { id, spot: None } => format!("車両 {} は駐車されていません", id),
            Self::Spots(spots) => format!("{} 件のスポット", spots.len()),
            Self::Json(_) => "JSON を出力しました".to_string(),
            Self::Status { occupancy, .. } => format!(
                "使用中 {}/{} (空き {})",
                occupancy.occupied, occupancy.capacity, occupancy.free
            ),
            Self::Fees(_) => "料金表".to_string(),
            Self::Help => "help".to_string(),
            Self::Quit => "終了します".to_string(),
        }
    }
}

/// 1つの駐車場に対する対話セッション
pub struct Session {
    service: AllocationService,
}

impl Session {
    pub fn new(service: AllocationService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &AllocationService {
        &self.service
    }

    /// 1行を解釈して実行する。空行と `#` で始まる行は `None`
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Outcome>, SessionError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let command = trimmed.parse::<Command>()?;
        self.execute(command).map(Some)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let outcome = match command {
            Command::Park { id, category } => {
                Outcome::Parked(self.service.park_str(&id, &category)?)
            }
            Command::Remove { id } => Outcome::Removed(self.service.remove(&id)?),
            Command::Find { id } => {
                let spot = self.service.find(&id)?;
                Outcome::Found {
                    id: id.trim().to_string(),
                    spot,
                }
            }
            Command::List { json: false } => Outcome::Spots(self.service.list_spots()),
            Command::List { json: true } => {
                Outcome::Json(serde_json::to_string_pretty(&self.service.list_spots())?)
            }
            Command::Status => {
                self.service.check_consistency()?;
                Outcome::Status {
                    lot: self.service.name().to_string(),
                    occupancy: self.service.occupancy(),
                }
            }
            Command::Fees => Outcome::Fees(self.service.fees().entries().collect()),
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }
}
