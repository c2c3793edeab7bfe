/// 一覧コマンド
///
/// Video Indexer APIからアカウント内の動画一覧を取得します。
/// パイプラインは「トークン取得 → 一覧取得 → JSONパース」の3段階を
/// この順で一度ずつ実行し、最初の失敗で即座に中断します。
use crate::api::client::VideoIndexerClient;
use crate::api::types::VideoListPage;
use crate::commands::result::{CommandResult, ListResult};
use crate::config::{AccountConfig, UserConfig};
use crate::domain::formatter;
use anyhow::{Context, Result};

/// 一覧コマンドを実行する
///
/// # 戻り値
/// 成功・失敗を示すResult<CommandResult>
///
/// # エラー
/// アプリケーション層としてanyhow::Resultを返し、
/// 設定・API・ドメイン層のエラーを集約します。
pub async fn execute() -> Result<CommandResult> {
    // ユーザー設定を読み込み
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    // アカウント認証情報を取得
    let account = user_config
        .get_account()
        .context("Account credentials not found. Please run 'vindex login' first.")?;

    let client = VideoIndexerClient::production().context("Failed to create API client")?;

    execute_with_client(&client, account).await
}

/// 指定のクライアントとアカウントで一覧パイプラインを実行する
///
/// テストからはモックサーバーを指すクライアントを注入して呼び出す。
pub async fn execute_with_client(
    client: &VideoIndexerClient,
    account: &AccountConfig,
) -> Result<CommandResult> {
    // 1. アクセストークンを取得
    let token = client
        .access_token(account)
        .await
        .context("Failed to obtain an access token")?;

    // 2. トークンをクエリパラメータにして動画一覧を取得
    let body = client
        .list_videos(account, &token)
        .await
        .context("Failed to fetch the video list")?;

    // 3. レスポンスを構造化JSONとしてパース
    let data = formatter::parse_json(&body)
        .context("The video list response could not be parsed as JSON")?;

    // サマリー表示用の型付きビュー（ベストエフォート）
    let page = VideoListPage::from_value(&data);
    let total_count = match &page {
        Some(page) => page.results.len(),
        None => data
            .get("results")
            .and_then(|r| r.as_array())
            .map_or(0, |a| a.len()),
    };

    Ok(CommandResult::List(ListResult {
        data,
        page,
        total_count,
    }))
}
