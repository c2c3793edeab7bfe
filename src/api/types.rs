/// API通信用の型定義
///
/// Videosエンドポイントのレスポンスを人間向けサマリー表示のために
/// 寛容にデシリアライズする構造体を定義します。
/// レスポンス本体はあくまで不透明なJSONとして扱い、
/// ここでの型付けはベストエフォートの読み取り専用ビューです。
use serde::{Deserialize, Serialize};

/// 動画一覧レスポンスの1ページ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoListPage {
    /// 動画エントリの配列
    #[serde(default)]
    pub results: Vec<VideoSummary>,

    /// ページング情報（1回の呼び出しで返る範囲のみ扱う）
    #[serde(rename = "nextPage", default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<PagingInfo>,
}

/// 動画1件のサマリー
///
/// サマリー表示に使うフィールドのみを持ち、未知のフィールドは無視する。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    /// 動画ID
    pub id: String,

    /// 動画名
    #[serde(default)]
    pub name: Option<String>,

    /// インデックス処理の状態（"Uploaded", "Processing", "Processed" など）
    #[serde(default)]
    pub state: Option<String>,

    /// 作成日時（APIが返すタイムスタンプをそのまま保持）
    #[serde(default)]
    pub created: Option<String>,

    /// 動画の長さ（秒）
    #[serde(rename = "durationInSeconds", default)]
    pub duration_in_seconds: Option<f64>,
}

/// ページング情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingInfo {
    #[serde(rename = "pageSize", default)]
    pub page_size: Option<u64>,

    #[serde(default)]
    pub skip: Option<u64>,

    /// これが最終ページかどうか
    #[serde(default)]
    pub done: Option<bool>,
}

impl VideoListPage {
    /// 不透明なJSON値からベストエフォートでページを読み取る
    ///
    /// レスポンスがこの形に一致しない場合はNoneを返し、呼び出し側は
    /// サマリー表示を省略する。一覧取得自体は失敗扱いにしない。
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}
