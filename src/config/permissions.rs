/// ファイルパーミッション管理モジュール
///
/// プラットフォーム固有のファイルパーミッション設定を提供します。
/// サブスクリプションキーを含むconfig.tomlを所有者のみがアクセス可能にします。
///
/// Unix系 (Linux, macOS): 0600 (rw-------)
/// Windows: 追加設定なし（ユーザープロファイル配下はデフォルトで所有者のみ）
use crate::config::error::ConfigError;
use std::path::Path;

/// 認証情報ファイル用パーミッションを設定
///
/// # Errors
/// ファイルが存在しない場合、または
/// パーミッション設定に失敗した場合に ConfigError を返します。
pub fn set_credential_file_permissions(file_path: &Path) -> Result<(), ConfigError> {
    if !file_path.exists() {
        return Err(ConfigError::FileSystem {
            context: format!("Config file not found: {}", file_path.display()),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "File does not exist"),
        });
    }

    #[cfg(unix)]
    {
        set_unix_permissions(file_path)
    }

    #[cfg(not(unix))]
    {
        Ok(())
    }
}

/// Unix系システムでのパーミッション設定
#[cfg(unix)]
fn set_unix_permissions(file_path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = std::fs::Permissions::from_mode(0o600);
    std::fs::set_permissions(file_path, permissions).map_err(|e| ConfigError::FileSystem {
        context: format!(
            "Failed to set permissions (0600) for config file: {}",
            file_path.display()
        ),
        source: e,
    })
}
