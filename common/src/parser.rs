//! 解析APIレスポンスパーサー
//!
//! サーバ応答を防御的にデコードする:
//! - `ok` が真のときだけ `AnalysisResult` を構築
//! - 欠損・null・配列でない値はすべて「空」に正規化

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::types::AnalysisResult;

/// 解析APIの応答
#[derive(Debug, Clone)]
pub enum AnalyzeResponse {
    /// `ok: true` — 画面表示用データ一式
    Success(AnalysisResult),
    /// `ok` が偽または欠損 — サーバが返したエラー文字列（あれば）
    Failure(Option<String>),
}

/// レスポンスボディをパースする
///
/// # Returns
/// * `Ok(AnalyzeResponse)` - JSONとして読めた場合（成功・サーバエラーの両方）
/// * `Err` - ボディがJSONとして解釈できない場合（通信エラー扱い）
pub fn parse_analyze_response(body: &str) -> Result<AnalyzeResponse> {
    let value: Value = serde_json::from_str(body)?;

    // 元のフロントエンドと同じく、`ok` が真でなければすべてサーバエラー経路
    if value.get("ok").and_then(Value::as_bool).unwrap_or(false) {
        Ok(AnalyzeResponse::Success(decode_analysis(&value)))
    } else {
        let error = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(AnalyzeResponse::Failure(error))
    }
}

/// 成功ペイロードを完全デフォルト化された `AnalysisResult` に変換する
///
/// `top2` / `products` / `videos` は欠損または配列でない場合に空列、
/// `catchcopy` は欠損またはnullの場合に空文字となる。
pub fn decode_analysis(payload: &Value) -> AnalysisResult {
    AnalysisResult {
        type_labels: get_string_seq(payload, "top2"),
        description: get_string(payload, "catchcopy").unwrap_or_default(),
        products: get_seq(payload, "products"),
        videos: get_seq(payload, "videos"),
    }
}

fn get_string(payload: &Value, key: &str) -> Option<String> {
    payload.get(key)?.as_str().map(str::to_string)
}

fn get_string_seq(payload: &Value, key: &str) -> Vec<String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn get_seq<T: DeserializeOwned>(payload: &Value, key: &str) -> Vec<T> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| serde_json::from_value(Value::Array(items.clone())).unwrap_or_default())
        .unwrap_or_default()
}
