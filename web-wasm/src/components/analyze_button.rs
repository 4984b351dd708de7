//! 解析開始ボタンコンポーネント

use leptos::prelude::*;
use smartgirl_common::Lifecycle;

#[component]
pub fn AnalyzeButton<F>(
    lifecycle: ReadSignal<Lifecycle>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary"
            disabled=move || lifecycle.get().is_loading()
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            {move || lifecycle.get().trigger_label()}
        </button>
    }
}
