/// 設定管理モジュール
///
/// このモジュールは2層の設定構造を提供します:
/// 1. AppConfig - ビルド時に埋め込まれる静的設定（APP_CONFIG）
/// 2. UserConfig - 実行時に読み込まれる動的設定（アカウント認証情報）
pub mod app;
pub mod error;
pub mod permissions;
pub mod user;

pub use app::APP_CONFIG;
pub use user::{AccountConfig, UserConfig};
