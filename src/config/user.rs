/// ユーザー設定モジュール
///
/// 実行時にユーザーディレクトリから読み込まれる動的設定を管理します。
/// Windows: C:\Users\<User>\AppData\Roaming\vindex\config.toml
/// macOS:   /Users/<User>/Library/Application Support/vindex/config.toml
/// Linux:   /home/<user>/.config/vindex/config.toml
///
/// 初回起動時にデフォルト値から自動的にconfig.tomlを作成します。
use crate::config::error::ConfigError;
use crate::config::permissions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// デフォルトのリージョン（Video Indexerのトライアル環境）
pub const DEFAULT_LOCATION: &str = "trial";

/// Video Indexer アカウント認証情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Video Indexer アカウントID (GUID)
    pub account_id: String,

    /// API Management サブスクリプションキー
    pub api_key: String,

    /// リージョン/デプロイラベル（例: "trial", "westus2"）
    pub location: String,
}

/// ユーザー設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Video Indexer アカウント認証情報
    pub account: Option<AccountConfig>,
}

impl UserConfig {
    /// ユーザー設定ファイルのパスを取得
    ///
    /// # Errors
    /// ホームディレクトリが取得できない場合に ConfigError::DirectoryNotFound を返します。
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("vindex").join("config.toml"))
    }

    /// ユーザー設定を読み込む
    ///
    /// 設定ファイルが存在しない場合は、デフォルトテンプレートから自動的に作成します。
    /// 読み込み後、自動的に検証を実行します（Fail Fast）。
    ///
    /// # Errors
    /// 設定ファイルの読み込み、パース、または検証に失敗した場合に ConfigError を返します。
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスからユーザー設定を読み込む
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            // 設定ファイルが存在しない場合は、デフォルトから作成
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        // 自動検証（Fail Fast）
        config.validate()?;

        Ok(config)
    }

    /// ユーザー設定を保存する
    ///
    /// 親ディレクトリが存在しない場合は作成し、保存後に
    /// サブスクリプションキーを含むファイルを所有者のみアクセス可能にします。
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// 指定パスへユーザー設定を保存する
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::serialize_error("Failed to serialize user config", e))?;

        fs::write(config_path, content).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to write config file: {}", config_path.display()),
                e,
            )
        })?;

        permissions::set_credential_file_permissions(config_path)?;

        Ok(())
    }

    /// 設定を検証する
    ///
    /// # 検証内容
    /// - account.account_id: 空文字列でないこと
    /// - account.api_key: 空文字列でないこと
    /// - account.location: 空文字列・空白を含まないこと
    ///
    /// # Errors
    /// 検証に失敗した場合に ConfigError::ValidationError を返します。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(account) = &self.account {
            Self::validate_field(&account.account_id, "account_id")?;
            Self::validate_field(&account.api_key, "api_key")?;
            Self::validate_field(&account.location, "location")?;

            if account.location.contains(char::is_whitespace) {
                return Err(ConfigError::validation_error(format!(
                    "Invalid location '{}': must not contain whitespace",
                    account.location
                )));
            }
        }

        Ok(())
    }

    /// 認証情報のフィールドを検証
    fn validate_field(value: &str, field_name: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::validation_error(format!(
                "Account {} cannot be empty. Please run 'vindex login' again.",
                field_name
            )));
        }
        Ok(())
    }

    /// アカウント認証情報を設定
    pub fn set_account(&mut self, account_id: String, api_key: String, location: String) {
        self.account = Some(AccountConfig {
            account_id,
            api_key,
            location,
        });
    }

    /// アカウント認証情報を取得
    ///
    /// # Errors
    /// 認証情報が設定されていない場合に ConfigError::AccountNotFound を返します。
    pub fn get_account(&self) -> Result<&AccountConfig, ConfigError> {
        self.account.as_ref().ok_or_else(|| {
            ConfigError::account_not_found(
                "Account credentials not found. Please run 'vindex login' first.",
            )
        })
    }

    /// アカウント認証情報が存在するかチェック
    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }

    /// アカウント認証情報を削除
    pub fn clear_account(&mut self) {
        self.account = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_account() {
        // 認証情報の有無を正しく判定できることを確認
        let mut config = UserConfig::default();
        assert!(!config.has_account());

        config.set_account(
            "00000000-0000-0000-0000-000000000000".to_string(),
            "test_key".to_string(),
            DEFAULT_LOCATION.to_string(),
        );
        assert!(config.has_account());
    }

    #[test]
    fn test_get_account() {
        // 未設定の場合はAccountNotFound、設定後は取得できる
        let mut config = UserConfig::default();

        let result = config.get_account();
        assert!(result.is_err());
        if let Err(ConfigError::AccountNotFound { message }) = result {
            assert!(message.contains("login"));
        } else {
            panic!("Expected AccountNotFound");
        }

        config.set_account(
            "acc".to_string(),
            "key".to_string(),
            "trial".to_string(),
        );
        let account = config.get_account().unwrap();
        assert_eq!(account.account_id, "acc");
        assert_eq!(account.api_key, "key");
        assert_eq!(account.location, "trial");
    }

    #[test]
    fn test_clear_account() {
        let mut config = UserConfig::default();
        config.set_account("acc".to_string(), "key".to_string(), "trial".to_string());
        assert!(config.has_account());

        config.clear_account();
        assert!(!config.has_account());
        assert!(config.get_account().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut config = UserConfig::default();
        config.set_account("acc".to_string(), "  ".to_string(), "trial".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_whitespace_location() {
        let mut config = UserConfig::default();
        config.set_account("acc".to_string(), "key".to_string(), "west us".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path() {
        // プラットフォーム固有のパスが正しく取得できることを確認
        let path = UserConfig::config_path().expect("Failed to get config path");
        assert!(path.to_string_lossy().contains("vindex"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        // save_to() と load_from() の往復検証
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");

        let mut test_config = UserConfig::default();
        test_config.set_account(
            "test_account_xyz".to_string(),
            "test_key_xyz".to_string(),
            "westus2".to_string(),
        );

        test_config.save_to(&config_path).expect("Failed to save config");
        assert!(config_path.exists(), "Config file should exist after save");

        let loaded = UserConfig::load_from(&config_path).expect("Failed to load config");
        let loaded_account = loaded.get_account().expect("Account should be present");
        assert_eq!(loaded_account.account_id, "test_account_xyz");
        assert_eq!(loaded_account.api_key, "test_key_xyz");
        assert_eq!(loaded_account.location, "westus2");
    }

    #[test]
    fn test_load_creates_default_config() {
        // 設定ファイルが存在しない場合にデフォルトが作成されることを確認
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = UserConfig::load_from(&config_path).expect("Default config should load");
        assert!(!config.has_account(), "Default config should not have account");
        assert!(config_path.exists(), "Default config file should be created");
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "account = not valid toml {").unwrap();

        let result = UserConfig::load_from(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
