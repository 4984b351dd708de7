//! 解析APIクライアント
//!
//! ローカルの解析サーバへPOSTし、レスポンスボディをそのまま返す。
//! ボディの解釈はsmartgirl-common側のパーサーが行う。

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const ANALYZE_ENDPOINT: &str = "http://127.0.0.1:8000/";

/// リクエストボディ（呼び出し元をサーバへ伝えるマーカー）
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest {
    request_from: &'static str,
}

impl AnalyzeRequest {
    fn new() -> Self {
        Self {
            request_from: "react",
        }
    }
}

/// 解析リクエストを1回発行し、レスポンスボディ文字列を返す
///
/// HTTPステータスでは分岐しない: 元のフロントエンドと同じく、
/// 成否の判定はボディの `ok` フィールドに委ねる
pub async fn request_analysis() -> Result<String, JsValue> {
    let body = serde_json::to_string(&AnalyzeRequest::new())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(ANALYZE_ENDPOINT, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
