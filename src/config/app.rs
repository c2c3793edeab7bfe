/// アプリケーション設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません。
use serde::Deserialize;
use std::sync::LazyLock;

/// アプリケーション全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Video Indexer API のベースURL
    pub endpoint: String,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,
}

/// ビルド時に埋め込まれた設定のグローバル定数
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::load);

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    ///
    /// # Panics
    /// 設定ファイルのパースに失敗した場合はパニックします。
    /// これはビルド時設定なので、実行時エラーではなくビルドの問題として扱うべきです。
    pub fn load() -> Self {
        const CONFIG_STR: &str = include_str!("../../config.toml");
        toml::from_str(CONFIG_STR)
            .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
    }
}
