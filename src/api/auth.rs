/// アクセストークン型
///
/// 認証エンドポイントが返す短命トークンを表す薄いラッパー。
/// 無関係な文字列を誤ってクエリパラメータに埋め込まないよう、
/// 生のStringではなく専用型として扱う。
use serde::Serialize;

/// Video Indexer のアクセストークン
///
/// 取得したプロセス内で一度だけ使用され、永続化されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// トークン文字列からアクセストークンを作成
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 認証エンドポイントのレスポンスボディからアクセストークンを作成
    ///
    /// APIはトークンをJSON文字列リテラル（`"eyJ..."`）として返すため、
    /// 前後の空白を除去した上で、囲みの二重引用符を一組だけ取り除く。
    /// 引用符なしのボディはそのまま使用される。
    pub fn from_response_body(body: &str) -> Self {
        let trimmed = body.trim();
        let token = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);
        Self(token.to_string())
    }

    /// クエリパラメータに埋め込むトークン文字列を取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// トークンが空かどうか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// トークンをマスキングして表示用文字列を返す
    pub fn masked(&self) -> String {
        if self.0.len() <= 8 {
            "*".repeat(self.0.len())
        } else {
            format!("{}***{}", &self.0[..4], &self.0[self.0.len() - 4..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_quoted_body() {
        // JSON文字列リテラルとして返されたトークンの引用符を除去
        let token = AccessToken::from_response_body("\"eyJhbGciOiJSUzI1NiJ9\"");
        assert_eq!(token.as_str(), "eyJhbGciOiJSUzI1NiJ9");
    }

    #[test]
    fn test_from_bare_body() {
        // 引用符なしのボディはそのまま
        let token = AccessToken::from_response_body("eyJhbGciOiJSUzI1NiJ9");
        assert_eq!(token.as_str(), "eyJhbGciOiJSUzI1NiJ9");
    }

    #[test]
    fn test_trims_whitespace() {
        let token = AccessToken::from_response_body("  \"abc123\"\n");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_lone_quote_is_preserved() {
        // 片側だけの引用符は囲みとみなさない
        let token = AccessToken::from_response_body("\"abc");
        assert_eq!(token.as_str(), "\"abc");
    }

    #[test]
    fn test_empty_body() {
        let token = AccessToken::from_response_body("\"\"");
        assert!(token.is_empty());
    }

    #[test]
    fn test_masking() {
        let token = AccessToken::new("abcdef123456789");
        let masked = token.masked();
        assert!(masked.starts_with("abcd"));
        assert!(masked.contains("***"));
        assert!(masked.ends_with("6789"));
        assert!(!masked.contains("ef12345"));
    }

    #[test]
    fn test_short_token_masking() {
        let token = AccessToken::new("short");
        assert_eq!(token.masked(), "*****");
    }
}
