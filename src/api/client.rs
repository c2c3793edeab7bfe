/// HTTPクライアント
///
/// Video Indexer APIとの通信を担当するHTTPクライアント。
/// トークン取得と動画一覧取得の2つの操作を、この順でのみ使用する。
/// リトライやコネクションの再利用方針は持たない。
use crate::api::auth::AccessToken;
use crate::api::error::ApiError;
use crate::config::{APP_CONFIG, AccountConfig};
use reqwest::{Client, Response};
use std::time::Duration;

/// サブスクリプションキーを渡すAPI Managementのヘッダー名
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// APIクライアントの結果型
type ApiResult<T> = Result<T, ApiError>;

/// Video Indexer APIクライアント
pub struct VideoIndexerClient {
    client: Client,
    base_url: String,
}

impl VideoIndexerClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "https://api.videoindexer.ai"）
    ///
    /// テストではローカルのモックサーバーのURLを指定する。
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let timeout = Duration::from_secs(APP_CONFIG.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::auth(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// デフォルトのプロダクション環境クライアントを作成
    pub fn production() -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint.clone())
    }

    /// アクセストークンを取得
    ///
    /// `GET {base}/auth/{location}/Accounts/{accountId}/AccessToken` に
    /// サブスクリプションキーのヘッダーを付けてリクエストする。
    ///
    /// # Errors
    /// ネットワーク障害または非成功ステータスの場合に ApiError::Auth を返す。
    pub async fn access_token(&self, account: &AccountConfig) -> ApiResult<AccessToken> {
        let url = self.auth_url(account);

        let response = self
            .client
            .get(&url)
            .header(SUBSCRIPTION_KEY_HEADER, &account.api_key)
            .send()
            .await
            .map_err(|e| ApiError::auth(Self::transport_message("GET", &url, &e), None))?;

        let response = Self::check_status(response, ApiError::auth).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::auth(format!("Failed to read token response: {}", e), None))?;

        let token = AccessToken::from_response_body(&body);
        if token.is_empty() {
            return Err(ApiError::auth(
                "Auth endpoint returned an empty token",
                None,
            ));
        }

        Ok(token)
    }

    /// アカウント内の動画一覧を取得し、生のレスポンスボディを返す
    ///
    /// `GET {base}/{location}/Accounts/{accountId}/Videos?accessToken={token}`
    /// をリクエストする。トークンのパーセントエンコードはreqwestの
    /// クエリシリアライザに委ねる。
    ///
    /// # Errors
    /// ネットワーク障害または非成功ステータスの場合に ApiError::List を返す。
    pub async fn list_videos(
        &self,
        account: &AccountConfig,
        token: &AccessToken,
    ) -> ApiResult<String> {
        let url = self.videos_url(account);

        let response = self
            .client
            .get(&url)
            .query(&[("accessToken", token.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::list(Self::transport_message("GET", &url, &e), None))?;

        let response = Self::check_status(response, ApiError::list).await?;

        response
            .text()
            .await
            .map_err(|e| ApiError::list(format!("Failed to read videos response: {}", e), None))
    }

    /// 認証エンドポイントのURLを構築
    fn auth_url(&self, account: &AccountConfig) -> String {
        format!(
            "{}/auth/{}/Accounts/{}/AccessToken",
            self.base_url, account.location, account.account_id
        )
    }

    /// VideosエンドポイントのURLを構築（クエリは別途付与）
    fn videos_url(&self, account: &AccountConfig) -> String {
        format!(
            "{}/{}/Accounts/{}/Videos",
            self.base_url, account.location, account.account_id
        )
    }

    /// トランスポート層エラーのメッセージを構築
    fn transport_message(method: &str, url: &str, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("{} {} timed out", method, url)
        } else if error.is_connect() {
            format!("Connection failed for {} {}: {}", method, url, error)
        } else {
            format!("Request failed for {} {}: {}", method, url, error)
        }
    }

    /// レスポンスのステータスをチェックし、非成功ならエラーに変換する
    async fn check_status(
        response: Response,
        make_error: fn(String, Option<u16>) -> ApiError,
    ) -> ApiResult<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        Err(make_error(
            format!("HTTP {}: {}", status_code, error_body),
            Some(status_code),
        ))
    }
}
