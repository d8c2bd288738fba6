//! 駐車場コアのエラー型

/// 駐車・出庫操作のエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParkError {
    #[error("車両番号は2文字以上の英数字で入力してください: '{0}'")]
    InvalidInput(String),

    #[error("不明な車種です: '{0}' (car, motorcycle, truck のいずれか)")]
    InvalidCategory(String),

    #[error("車両 {0} は既に駐車されています")]
    DuplicateVehicle(String),

    #[error("空いている駐車スポットがありません")]
    NoCapacity,

    #[error("車両 {0} はこの駐車場に駐車されていません")]
    NotFound(String),

    #[error("内部整合性エラー: {0}")]
    InternalConsistency(String),
}

impl ParkError {
    /// 利用者が入力を直して再試行できるエラーかどうか
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InternalConsistency(_))
    }
}

pub type Result<T> = std::result::Result<T, ParkError>;
