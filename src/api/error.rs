/// インフラ層のエラー定義
///
/// Video Indexer APIとのやり取りで発生するエラーを、失敗したフェーズ
/// （トークン取得 / 動画一覧取得）ごとに構造化して定義。
/// リトライは行わず、最初のエラーを即座に伝播する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// アクセストークン取得の失敗
    ///
    /// HTTPステータスが非成功の場合とネットワーク障害の両方を含む。
    #[error("failed to obtain access token: {message}")]
    Auth {
        message: String,
        status_code: Option<u16>,
    },

    /// 動画一覧取得の失敗
    #[error("failed to list videos: {message}")]
    List {
        message: String,
        status_code: Option<u16>,
    },
}

impl ApiError {
    /// トークン取得エラーを作成
    pub fn auth(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Auth {
            message: message.into(),
            status_code,
        }
    }

    /// 一覧取得エラーを作成
    pub fn list(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::List {
            message: message.into(),
            status_code,
        }
    }

    /// 失敗時のHTTPステータスコード（ネットワーク障害の場合はNone）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Auth { status_code, .. } | Self::List { status_code, .. } => *status_code,
        }
    }

    /// エラーの深刻度を返す
    ///
    /// 認証拒否（401/403）はサブスクリプションキーの問題なので設定エラー、
    /// それ以外は外部要因としてシステムエラー扱い。
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Auth {
                status_code: Some(401) | Some(403),
                ..
            } => ErrorSeverity::ConfigError,
            _ => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Auth {
                status_code: Some(401) | Some(403),
                ..
            } => Some(
                "The API rejected your subscription key. Verify the key, account id and location with 'vindex login'.",
            ),
            Self::Auth { status_code: None, .. } | Self::List { status_code: None, .. } => {
                Some("Check your network connection and try again.")
            }
            Self::List { .. } => {
                Some("The Video Indexer service returned an error. Try again later.")
            }
            Self::Auth { .. } => None,
        }
    }
}
