//! 画面状態の純粋導出
//!
//! AnalysisResultとLifecycleから、パネル表示可否・ボタン表示・
//! 結合文字列・通知文言を導出する。副作用なし。

use crate::types::AnalysisResult;

/// 通信エラー時の固定通知文言
pub const NOTICE_TRANSPORT_ERROR: &str = "通信エラーが発生しました";

/// 解析リクエストのライフサイクル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
}

impl Lifecycle {
    pub fn is_loading(self) -> bool {
        self == Lifecycle::Loading
    }

    /// トリガーボタンのラベル
    pub fn trigger_label(self) -> &'static str {
        match self {
            Lifecycle::Idle => "AI分析を開始",
            Lifecycle::Loading => "分析中...",
        }
    }
}

/// 画面表示の導出値
///
/// パネル表示可否は互いに独立で、部分的な結果でも正しく表示される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub trigger_label: &'static str,
    pub trigger_disabled: bool,
    pub show_type_panel: bool,
    pub show_product_panel: bool,
    pub show_video_panel: bool,
}

/// 現在の状態から画面表示を導出する
pub fn derive_view(lifecycle: Lifecycle, result: &AnalysisResult) -> ViewState {
    ViewState {
        trigger_label: lifecycle.trigger_label(),
        trigger_disabled: lifecycle.is_loading(),
        show_type_panel: !result.type_labels.is_empty(),
        show_product_panel: !result.products.is_empty(),
        show_video_panel: !result.videos.is_empty(),
    }
}

/// 分類ラベルを表示用に結合する（並び順保持）
pub fn joined_type_labels(labels: &[String]) -> String {
    labels.join(" × ")
}

/// 商品カテゴリを表示用に結合する
pub fn joined_categories(categories: &[String]) -> String {
    categories.join(", ")
}

/// 動画リンクのラベル（タイトルが無ければ固定文言）
pub fn video_title(title: Option<&str>) -> &str {
    title.unwrap_or("タイトルなし")
}

/// サーバエラー通知の文言を組み立てる
///
/// サーバがerror文字列を返さなかった場合は "不明" を使う
pub fn server_failure_notice(error: Option<&str>) -> String {
    format!("サーバーエラー: {}", error.unwrap_or("不明"))
}
