/// ドメイン層モジュール
///
/// 外部システムに依存しない純粋なビジネスロジック（レスポンス整形）と
/// そのエラー定義を提供します。

pub mod error;
pub mod formatter;
