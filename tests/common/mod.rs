//! Common test utilities and helpers.
//!
//! ローカルポートで起動するVideo Indexer APIのモックサーバー。
//! 認証エンドポイントとVideosエンドポイントのレスポンスを差し替え、
//! 受信したリクエストラインを記録する。

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use vindex::config::AccountConfig;

/// テスト用アカウントID
pub const TEST_ACCOUNT_ID: &str = "11111111-2222-3333-4444-555555555555";

/// テストで使用するアカウント認証情報
pub fn test_account() -> AccountConfig {
    AccountConfig {
        account_id: TEST_ACCOUNT_ID.to_string(),
        api_key: "test-subscription-key".to_string(),
        location: "trial".to_string(),
    }
}

/// 記録されたリクエスト
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// クエリを含むリクエストターゲット（例: "/trial/Accounts/../Videos?accessToken=x"）
    pub target: String,
    /// Ocp-Apim-Subscription-Key ヘッダーの値（存在した場合）
    pub subscription_key: Option<String>,
}

#[derive(Debug)]
struct MockState {
    auth_response: (u16, String),
    videos_response: (u16, String),
    requests: Vec<RecordedRequest>,
}

/// Video Indexer APIのモックサーバー
pub struct MockVideoIndexer {
    pub base_url: String,
    state: Arc<Mutex<MockState>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockVideoIndexer {
    /// ランダムポートでモックサーバーを起動する
    ///
    /// デフォルトでは認証はトークン `"test-token"`（JSON文字列リテラル）を、
    /// Videosは空の一覧を返す。
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Failed to get local addr");
        let base_url = format!("http://{}", addr);

        let state = Arc::new(Mutex::new(MockState {
            auth_response: (200, "\"test-token\"".to_string()),
            videos_response: (200, r#"{"results":[]}"#.to_string()),
            requests: Vec::new(),
        }));

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let accept_state = Arc::clone(&state);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { break };
                        let conn_state = Arc::clone(&accept_state);
                        tokio::spawn(async move {
                            handle_connection(stream, conn_state).await;
                        });
                    }
                    _ = &mut shutdown_rx => break,
                }
            }
        });

        Self {
            base_url,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// 認証エンドポイントのレスポンスを設定する
    pub fn set_auth_response(&self, status: u16, body: impl Into<String>) {
        self.state.lock().unwrap().auth_response = (status, body.into());
    }

    /// Videosエンドポイントのレスポンスを設定する
    pub fn set_videos_response(&self, status: u16, body: impl Into<String>) {
        self.state.lock().unwrap().videos_response = (status, body.into());
    }

    /// 記録された全リクエストを取得する
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Videosエンドポイントへのリクエストのみ取得する
    pub fn videos_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.target.contains("/Videos"))
            .collect()
    }

    /// 認証エンドポイントへのリクエストのみ取得する
    pub fn auth_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.target.contains("/AccessToken"))
            .collect()
    }
}

impl Drop for MockVideoIndexer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// 1コネクションを処理する
///
/// GETのみを想定しているため、ヘッダー終端まで読めばリクエスト全体が揃う。
async fn handle_connection(mut stream: tokio::net::TcpStream, state: Arc<Mutex<MockState>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(_) => return,
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let mut lines = head.lines();
    let Some(request_line) = lines.next() else {
        return;
    };

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let subscription_key = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("Ocp-Apim-Subscription-Key"))
        .map(|(_, value)| value.trim().to_string());

    let (status, body) = {
        let mut state = state.lock().unwrap();
        state.requests.push(RecordedRequest {
            method,
            target: target.clone(),
            subscription_key,
        });

        let path = target.split('?').next().unwrap_or_default();
        if path.ends_with("/AccessToken") {
            state.auth_response.clone()
        } else if path.ends_with("/Videos") {
            state.videos_response.clone()
        } else {
            (404, "not found".to_string())
        }
    };

    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
