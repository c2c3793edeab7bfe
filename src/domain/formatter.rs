/// ドメイン層: レスポンス整形
///
/// APIレスポンスのJSONをインデント付きで再シリアライズする純粋関数を提供する。
/// ネストの深さはserde_jsonの再帰上限（128）まで保持され、
/// それを超える場合は黙って切り捨てずにパースエラーとなる。
use crate::domain::error::DomainError;
use serde_json::Value;

/// レスポンスボディをパースし、インデント付きJSONに整形する
///
/// # Errors
/// ボディが有効なJSONでない場合に DomainError::InvalidJson を返す。
pub fn pretty_json(body: &str) -> Result<String, DomainError> {
    let value = parse_json(body)?;
    to_pretty(&value)
}

/// 構造化JSON値をインデント付きで再シリアライズする
pub fn to_pretty(value: &Value) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value).map_err(|e| DomainError::invalid_json(e.to_string()))
}

/// レスポンスボディを構造化JSONとしてパースする
///
/// # Errors
/// ボディが有効なJSONでない場合に DomainError::InvalidJson を返す。
pub fn parse_json(body: &str) -> Result<Value, DomainError> {
    serde_json::from_str(body).map_err(|e| DomainError::invalid_json(e.to_string()))
}
