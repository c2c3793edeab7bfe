/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層（output.rs）で
/// 人間向けと機械向けの出力フォーマットを決定する。
use crate::api::types::VideoListPage;
use serde::Serialize;
use serde_json::Value;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Login(LoginResult),
    Logout(LogoutResult),
    Status(StatusResult),
    List(ListResult),
    Help,
}

/// ログインコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// 既にログイン済みだったか（上書き更新の場合true）
    pub was_logged_in: bool,
}

/// ログアウトコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResult {
    /// ログイン状態だったか
    pub was_logged_in: bool,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// 認証が通っているか（アクセストークンを取得できたか）
    pub is_authenticated: bool,
    /// アカウントID（認証情報がある場合）
    pub account_id: Option<String>,
    /// マスキングされたアクセストークン（取得できた場合）
    pub access_token: Option<String>,
}

/// 一覧コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    /// APIが返したレスポンス全体（不透明なJSON値）
    pub data: Value,
    /// サマリー表示用の型付きビュー（形が一致した場合のみ）
    #[serde(skip)]
    pub page: Option<VideoListPage>,
    /// 動画の総数（resultsの要素数）
    pub total_count: usize,
}
