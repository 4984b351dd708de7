//! メインアプリケーションコンポーネント
//!
//! 解析リクエストのライフサイクル管理と結果のコミットを担う。
//! パネルの描画は components/ 以下、ボディの解釈は smartgirl-common に委譲。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::analyze::request_analysis;
use crate::components::{
    analyze_button::AnalyzeButton, header::Header, product_panel::ProductPanel,
    type_panel::TypePanel, video_panel::VideoPanel,
};
use smartgirl_common::view::{self, NOTICE_TRANSPORT_ERROR};
use smartgirl_common::{parse_analyze_response, AnalysisResult, AnalyzeResponse, Lifecycle};

/// Loading解除ガード
///
/// 成功・サーバエラー・通信エラーのどの経路で抜けてもIdleへ戻す
struct LifecycleGuard<F: Fn(Lifecycle)>(F);

impl<F: Fn(Lifecycle)> Drop for LifecycleGuard<F> {
    fn drop(&mut self) {
        (self.0)(Lifecycle::Idle);
    }
}

/// 1回の解析サイクルの結末
#[derive(Debug, Clone)]
enum Settlement {
    /// 成功: 結果を丸ごとコミット
    Commit(AnalysisResult),
    /// サーバエラー: 通知のみ（状態は変えない）
    ServerNotice(String),
    /// ボディがJSONとして読めない: 固定通知＋コンソール診断
    DecodeFailure(String),
}

/// レスポンスボディから結末を決める（副作用なし）
fn route_settlement(body: &str) -> Settlement {
    match parse_analyze_response(body) {
        Ok(AnalyzeResponse::Success(analysis)) => Settlement::Commit(analysis),
        Ok(AnalyzeResponse::Failure(error)) => {
            Settlement::ServerNotice(view::server_failure_notice(error.as_deref()))
        }
        Err(e) => Settlement::DecodeFailure(e.to_string()),
    }
}

/// 通知の表示（一時的、状態には残らない）
fn show_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (lifecycle, set_lifecycle) = signal(Lifecycle::Idle);
    let (result, set_result) = signal(AnalysisResult::default());

    // 解析開始ハンドラ
    //
    // ボタンのdisabledが唯一の再入抑止（元のフロントエンドと同じ）。
    // 結果は1つのシグナルへの書き込み1回で丸ごと置き換える。
    let on_analyze = move |_| {
        set_lifecycle.set(Lifecycle::Loading);
        spawn_local(async move {
            let _guard = LifecycleGuard(move |state| set_lifecycle.set(state));

            match request_analysis().await {
                Ok(body) => match route_settlement(&body) {
                    Settlement::Commit(analysis) => {
                        set_result.set(analysis);
                    }
                    Settlement::ServerNotice(message) => {
                        show_notice(&message);
                    }
                    Settlement::DecodeFailure(diagnostic) => {
                        gloo::console::error!(diagnostic);
                        show_notice(NOTICE_TRANSPORT_ERROR);
                    }
                },
                Err(e) => {
                    gloo::console::error!(e);
                    show_notice(NOTICE_TRANSPORT_ERROR);
                }
            }
        });
    };

    // パネル表示可否の導出（純粋関数）
    let panels = move || view::derive_view(lifecycle.get(), &result.get());

    view! {
        <div class="container">
            <Header />

            <AnalyzeButton lifecycle=lifecycle on_analyze=on_analyze />

            <Show when=move || panels().show_type_panel>
                <TypePanel result=result />
            </Show>

            <Show when=move || panels().show_product_panel>
                <ProductPanel result=result />
            </Show>

            <Show when=move || panels().show_video_panel>
                <VideoPanel result=result />
            </Show>
        </div>
    }
}
