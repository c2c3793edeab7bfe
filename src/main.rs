use std::env;

use anyhow::Result;
use vindex::api::error::ApiError;
use vindex::cli;
use vindex::config::error::ConfigError;
use vindex::domain::error::DomainError;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let machine_output = args.iter().skip(1).any(|arg| arg == "--machine");

    if let Err(e) = run(&args).await {
        handle_error(e, machine_output);
    }
}

/// アプリケーションのメイン処理
async fn run(args: &[String]) -> Result<()> {
    cli::parse_args(args).await
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) -> ! {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);

    if machine_output {
        // 機械可読のエラーオブジェクトをstdoutへ
        let json = serde_json::json!({
            "success": false,
            "error": format!("{:#}", error),
            "exit_code": exit_code,
            "hint": hint,
        });
        println!("{}", json);
    } else {
        // エラーメッセージのヘッダー
        eprintln!("Error: {}", error);

        // エラーチェーンを辿って詳細を表示
        let chain: Vec<_> = error.chain().skip(1).collect();
        if !chain.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in chain.iter().enumerate() {
                eprintln!("  {}: {}", i + 1, cause);
            }
        }

        // ユーザー向けのヒントを表示
        if let Some(hint) = hint {
            eprintln!("\nHint: {}", hint);
        }
    }

    std::process::exit(exit_code);
}

/// エラーチェーンから適切な終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    // エラーチェーン全体を探索
    for cause in error.chain() {
        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            return domain_err.severity().exit_code();
        }

        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            return api_err.severity().exit_code();
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_err.severity().exit_code();
        }
    }

    // 不明なエラー（引数の誤りなど）はユーザーエラー扱い
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    for cause in error.chain() {
        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            if let Some(hint) = domain_err.hint() {
                return Some(hint.to_string());
            }
        }

        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            if let Some(hint) = api_err.hint() {
                return Some(hint.to_string());
            }
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            if let Some(hint) = config_err.hint() {
                return Some(hint.to_string());
            }
        }
    }

    None
}
