/// CLI引数の解析とコマンドディスパッチ
use crate::commands;
use crate::presentation::output;
use anyhow::{Result, bail};

/// CLI引数を解析し、適切なコマンドにディスパッチする
///
/// グローバルフラグ `--machine` はどの位置にあっても有効。
/// コマンドが省略された場合は `list` を実行する（プログラムの
/// 基本動作: トークン取得 → 動画一覧取得 → 整形JSONの出力）。
pub async fn parse_args(args: &[String]) -> Result<()> {
    let machine_output = args.iter().skip(1).any(|arg| arg == "--machine");

    let rest: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| *arg != "--machine")
        .collect();

    let command = rest.first().map(|s| s.as_str()).unwrap_or("list");

    let result = match command {
        "list" => commands::list::execute().await?,
        "login" => {
            let from_stdin = rest.iter().any(|arg| *arg == "--stdin");
            commands::login::execute(from_stdin).await?
        }
        "logout" => commands::logout::execute().await?,
        "status" => commands::status::execute().await?,
        "help" | "--help" | "-h" => commands::help::execute().await?,
        _ => bail!(
            "Unknown command: '{}'. Use 'vindex help' to see available commands.",
            command
        ),
    };

    output::output_result(&result, machine_output)
}
