/// ドメイン層のエラー定義
///
/// レスポンス整形に関する制約違反を表現する。
/// 外部クレートのエラーは含まず、メッセージとして保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// レスポンスボディが有効なJSONではない
    #[error("response is not valid JSON: {message}")]
    InvalidJson { message: String },
}

impl DomainError {
    /// 無効なJSONエラーを生成
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson {
            message: message.into(),
        }
    }

    /// エラーの深刻度を返す
    ///
    /// レスポンスの破損は外部サービス側の要因なのでシステムエラー扱い。
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidJson { .. } => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidJson { .. } => {
                Some("The API returned a response that could not be parsed as JSON. Try again later.")
            }
        }
    }
}
