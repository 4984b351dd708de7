//! タイプ判定パネルコンポーネント

use leptos::prelude::*;
use smartgirl_common::{view, AnalysisResult};

#[component]
pub fn TypePanel(result: ReadSignal<AnalysisResult>) -> impl IntoView {
    view! {
        <div class="panel type-panel">
            <h2>"あなたのタイプ"</h2>
            <p class="type-labels">
                {move || view::joined_type_labels(&result.get().type_labels)}
            </p>
            // キャッチコピーはパネルが出ている限り、空でも描画する
            <p>{move || result.get().description.clone()}</p>
        </div>
    }
}
