//! 高評価動画パネルコンポーネント

use leptos::prelude::*;
use smartgirl_common::{view, AnalysisResult};

#[component]
pub fn VideoPanel(result: ReadSignal<AnalysisResult>) -> impl IntoView {
    view! {
        <div class="panel video-panel">
            <h2>"あなたの高評価動画"</h2>
            <ul>
                <For
                    each=move || {
                        result.get().videos.into_iter().enumerate().collect::<Vec<_>>()
                    }
                    key=|(i, _)| *i
                    children=move |(_, video)| {
                        view! {
                            <li>
                                <a href=video.url.clone() target="_blank" rel="noreferrer">
                                    {view::video_title(video.title.as_deref()).to_string()}
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
