//! 解析結果の型定義
//!
//! フロントエンドとパーサーで共有される型:
//! - AnalysisResult: 1回の解析で得られる画面表示用データ一式
//! - Product: おすすめ商品
//! - Video: 高評価動画

use serde::{Deserialize, Serialize};

/// AI解析結果
///
/// 成功レスポンスからまるごと1つ生成され、前回の結果を丸ごと置き換える。
/// 全フィールドがデフォルト化されており、「欠損」は存在しない（空のみ）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// 分類ラベル（サーバの並び順を保持）
    #[serde(rename = "top2")]
    pub type_labels: Vec<String>,

    /// キャッチコピー（無い場合は空文字）
    #[serde(rename = "catchcopy")]
    pub description: String,

    pub products: Vec<Product>,

    pub videos: Vec<Video>,
}

/// おすすめ商品
///
/// コメントのフィールド名はサーバ契約上 `coment`（外部契約のため修正しない）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub categories: Vec<String>,
    pub coment: Option<String>,
    pub url: String,
}

/// 高評価動画
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub title: Option<String>,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_default() {
        let result = AnalysisResult::default();
        assert!(result.type_labels.is_empty());
        assert_eq!(result.description, "");
        assert!(result.products.is_empty());
        assert!(result.videos.is_empty());
    }

    #[test]
    fn test_product_deserialize() {
        let json = r#"{
            "name": "商品A",
            "categories": ["ゲーム", "エンタメ"],
            "coment": "おすすめです",
            "url": "https://example.com/a"
        }"#;

        let product: Product = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.name, "商品A");
        assert_eq!(product.categories, vec!["ゲーム", "エンタメ"]);
        assert_eq!(product.coment.as_deref(), Some("おすすめです"));
        assert_eq!(product.url, "https://example.com/a");
    }

    #[test]
    fn test_product_deserialize_without_coment() {
        let json = r#"{"name": "商品B", "categories": ["音楽"], "url": "https://example.com/b"}"#;

        let product: Product = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(product.coment, None);
    }

    #[test]
    fn test_product_field_name_is_coment() {
        // サーバ契約のフィールド名は "coment"（"comment" ではない）
        let product = Product {
            name: "商品C".to_string(),
            coment: Some("コメント".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&product).expect("シリアライズ失敗");
        assert!(json.contains("\"coment\":\"コメント\""));
        assert!(!json.contains("\"comment\""));
    }

    #[test]
    fn test_video_deserialize_without_title() {
        let json = r#"{"url": "http://x"}"#;

        let video: Video = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(video.title, None);
        assert_eq!(video.url, "http://x");
    }

    #[test]
    fn test_analysis_result_deserialize_missing_fields() {
        // 欠損フィールドはすべてデフォルト値になる
        let json = r#"{"top2": ["ゲーム"]}"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(result.type_labels, vec!["ゲーム"]);
        assert_eq!(result.description, "");
        assert!(result.products.is_empty());
        assert!(result.videos.is_empty());
    }

    #[test]
    fn test_analysis_result_roundtrip() {
        let original = AnalysisResult {
            type_labels: vec!["ゲーム".to_string(), "エンタメ".to_string()],
            description: "あなたは遊び心タイプ".to_string(),
            products: vec![Product {
                name: "商品A".to_string(),
                categories: vec!["ゲーム".to_string()],
                coment: None,
                url: "https://example.com/a".to_string(),
            }],
            videos: vec![Video {
                title: Some("動画1".to_string()),
                url: "https://example.com/v1".to_string(),
            }],
        };

        let json = serde_json::to_string(&original).expect("シリアライズ失敗");
        let restored: AnalysisResult = serde_json::from_str(&json).expect("デシリアライズ失敗");

        assert_eq!(original.type_labels, restored.type_labels);
        assert_eq!(original.description, restored.description);
        assert_eq!(original.products.len(), restored.products.len());
        assert_eq!(original.videos.len(), restored.videos.len());
    }
}
