//! おすすめ商品パネルコンポーネント

use leptos::prelude::*;
use smartgirl_common::{view, AnalysisResult, Product};

#[component]
pub fn ProductPanel(result: ReadSignal<AnalysisResult>) -> impl IntoView {
    view! {
        <div class="panel product-panel">
            <h2>"おすすめ商品"</h2>
            <div class="product-grid">
                <For
                    each=move || {
                        result.get().products.into_iter().enumerate().collect::<Vec<_>>()
                    }
                    key=|(i, _)| *i
                    children=move |(_, product)| {
                        view! { <ProductCard product=product /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="product-card">
            <h3>{product.name.clone()}</h3>
            <p>{format!("カテゴリ: {}", view::joined_categories(&product.categories))}</p>
            // コメントは存在するときだけ描画（空表示にはしない）
            {product
                .coment
                .as_ref()
                .map(|coment| view! { <p class="product-comment">{format!("💬 {}", coment)}</p> })}
            <a href=product.url.clone() target="_blank" rel="noreferrer">
                "商品を見る"
            </a>
        </div>
    }
}
