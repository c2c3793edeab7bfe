/// プレゼンテーション層モジュール
///
/// アプリケーション層のコマンド結果とUI表示の橋渡しを行います。
///
/// # モジュール
/// - `input`: ユーザー入力処理
/// - `output`: コマンド結果の出力（人間向け・機械向け）

pub mod input;
pub mod output;
