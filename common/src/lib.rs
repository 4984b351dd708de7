//! SmartGirl Common Library
//!
//! Web(WASM)フロントエンドと共有される型とロジック

pub mod error;
pub mod parser;
pub mod types;
pub mod view;

pub use error::{Error, Result};
pub use parser::{decode_analysis, parse_analyze_response, AnalyzeResponse};
pub use types::{AnalysisResult, Product, Video};
pub use view::{derive_view, Lifecycle, ViewState};
