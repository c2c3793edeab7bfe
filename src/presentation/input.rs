/// プレゼンテーション層: ユーザー入力処理
///
/// stdinからのユーザー入力を取得し、
/// アプリケーション層で使用可能な形式に変換します。
use crate::commands::login::LoginCredentials;
use crate::config::user::DEFAULT_LOCATION;
use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// 対話的に認証情報を取得
///
/// プレゼンテーション層の責務として、ユーザー入力を取得し検証する
pub fn read_credentials_interactive() -> Result<LoginCredentials> {
    eprintln!("Logging in to Azure Video Indexer...");
    eprintln!();
    eprintln!("Please enter your Video Indexer account credentials.");
    eprintln!("You can find them at: https://www.videoindexer.ai/settings/account");
    eprintln!();

    // アカウントIDの取得
    eprint!("Account ID: ");
    io::stderr().flush()?;
    let account_id = read_trimmed_line("Account ID")?;

    if account_id.is_empty() {
        bail!("Account ID cannot be empty. Please provide a valid Account ID.");
    }

    // サブスクリプションキーの取得
    eprint!("Subscription Key: ");
    io::stderr().flush()?;
    let api_key = read_trimmed_line("Subscription Key")?;

    if api_key.is_empty() {
        bail!("Subscription Key cannot be empty. Please provide a valid Subscription Key.");
    }

    // リージョンの取得（空の場合はtrial）
    eprint!("Location [{}]: ", DEFAULT_LOCATION);
    io::stderr().flush()?;
    let mut location = read_trimmed_line("Location")?;

    if location.is_empty() {
        location = DEFAULT_LOCATION.to_string();
    }

    Ok(LoginCredentials {
        account_id,
        api_key,
        location,
    })
}

/// stdin からパイプで認証情報を取得（3行形式）
///
/// 形式:
///   1行目: Account ID
///   2行目: Subscription Key
///   3行目: Location（空行または省略で "trial"）
pub fn read_credentials_from_stdin() -> Result<LoginCredentials> {
    let account_id = read_trimmed_line("Account ID")?;
    if account_id.is_empty() {
        bail!(
            "Account ID cannot be empty. Please ensure the first line of stdin contains a valid Account ID."
        );
    }

    let api_key = read_trimmed_line("Subscription Key")?;
    if api_key.is_empty() {
        bail!(
            "Subscription Key cannot be empty. Please ensure the second line of stdin contains a valid Subscription Key."
        );
    }

    let mut location = read_trimmed_line("Location")?;
    if location.is_empty() {
        location = DEFAULT_LOCATION.to_string();
    }

    Ok(LoginCredentials {
        account_id,
        api_key,
        location,
    })
}

/// stdinから1行読み、前後の空白を除去して返す
fn read_trimmed_line(field_name: &str) -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {} from input", field_name))?;
    Ok(line.trim().to_string())
}
