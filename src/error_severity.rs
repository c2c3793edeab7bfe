//! プレゼンテーション層が使用するエラー深刻度
//!
//! 終了コードの決定に使用される、最も抽象的なエラー分類。
//! 内側層（domain, api, config）はこのモジュールに依存してOKだが、
//! このモジュールは他のモジュールに依存しない（独立）。

use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー（コマンドや引数の誤りなど）
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー（アカウントIDやサブスクリプションキーが無効など）
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー（ネットワーク障害、APIの内部エラーなど）
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}
