/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読）または
/// 機械向け（JSON）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
///
/// 一覧結果のJSON本体は常にstdoutへ、それ以外の人間向けメッセージは
/// stderrへ送り、stdoutをパイプライン用に保ちます。
use crate::commands::result::CommandResult;
use anyhow::Result;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "vindex
List the videos in an Azure Video Indexer account from the command line

Usage:
  vindex [--machine] [<command>] [args...]

Running vindex without a command is equivalent to 'vindex list'.

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Available commands:
  login [--stdin]  - Store your Video Indexer credentials
                     Without --stdin: Interactive credential input (default)
                     With --stdin: Read credentials from standard input
                                   Format: line 1 = Account ID,
                                           line 2 = Subscription Key,
                                           line 3 = Location (blank = trial)
  logout           - Remove stored credentials
  status           - Check authentication status
  list             - Fetch the video list and print it as formatted JSON
  help             - Display this help message

Error Output:
  Normal mode:   Human-readable error messages to stderr
  --machine:     JSON error object with exit_code and hint fields";

/// コマンド使用方法を表示する
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        output_machine_readable(result)?;
    } else {
        output_human_readable(result)?;
    }

    Ok(())
}

/// 人間向けの出力
///
/// 一覧のJSON本体のみstdoutへ、メッセージはstderrへ送ります。
fn output_human_readable(result: &CommandResult) -> Result<()> {
    match result {
        CommandResult::Login(r) => {
            eprintln!();
            if r.was_logged_in {
                eprintln!("Login credentials updated!");
                eprintln!("New account credentials have been saved.");
            } else {
                eprintln!("Login successful.");
                eprintln!("Account credentials have been saved.");
            }
        }
        CommandResult::Logout(r) => {
            if r.was_logged_in {
                eprintln!("Logged out successfully.");
                eprintln!("Account credentials have been removed.");
            } else {
                eprintln!("Already logged out.");
            }
        }
        CommandResult::Status(r) => {
            if r.is_authenticated {
                eprintln!("Authenticated");
                if let Some(account_id) = &r.account_id {
                    eprintln!("Account ID: {}", account_id);
                }
                if let Some(token) = &r.access_token {
                    eprintln!("Access Token: {}", token);
                }
                eprintln!();
                eprintln!("Your credentials are valid and working.");
            } else if let Some(account_id) = &r.account_id {
                // 認証情報はあるが検証失敗
                eprintln!("Authentication failed");
                eprintln!("  Account ID: {}", account_id);
                eprintln!();
                eprintln!("Your subscription key may be invalid or expired.");
                eprintln!("Please run 'vindex login' to update your credentials.");
            } else {
                // 認証情報が存在しない
                eprintln!("Not logged in");
                eprintln!("No account credentials found.");
                eprintln!("Please run 'vindex login' to authenticate.");
            }
        }
        CommandResult::List(r) => {
            // サマリーはstderrへ
            if r.total_count == 0 {
                eprintln!("No videos found.");
            } else {
                eprintln!("Found {} video(s):", r.total_count);
                if let Some(page) = &r.page {
                    for video in &page.results {
                        match (&video.name, &video.state) {
                            (Some(name), Some(state)) => {
                                eprintln!("  {} - {} ({})", video.id, name, state)
                            }
                            (Some(name), None) => eprintln!("  {} - {}", video.id, name),
                            _ => eprintln!("  {}", video.id),
                        }
                    }
                }
            }
            eprintln!();

            // レスポンス本体はインデント付きJSONとしてstdoutへ
            println!("{}", crate::domain::formatter::to_pretty(&r.data)?);
        }
        CommandResult::Help => {
            eprintln!("{}", HELP_TEXT);
        }
    }

    Ok(())
}

/// 機械可読JSONを出力（stdout）
///
/// スクリプトやパイプライン処理のために、
/// コマンド結果を構造化されたJSON形式で出力します。
fn output_machine_readable(result: &CommandResult) -> Result<()> {
    let json = match result {
        CommandResult::Login(r) => {
            serde_json::json!({
                "success": true,
                "command": "login",
                "was_logged_in": r.was_logged_in,
                "action": if r.was_logged_in { "updated" } else { "created" }
            })
        }
        CommandResult::Logout(r) => {
            serde_json::json!({
                "success": true,
                "command": "logout",
                "was_logged_in": r.was_logged_in
            })
        }
        CommandResult::Status(r) => {
            serde_json::json!({
                "success": true,
                "command": "status",
                "is_authenticated": r.is_authenticated,
                "account_id": r.account_id,
                "access_token": r.access_token
            })
        }
        CommandResult::List(r) => {
            serde_json::json!({
                "success": true,
                "command": "list",
                "data": r.data,
                "total_count": r.total_count
            })
        }
        CommandResult::Help => {
            serde_json::json!({
                "success": true,
                "command": "help"
            })
        }
    };

    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}
