//! 画面コンポーネント

pub mod analyze_button;
pub mod header;
pub mod product_panel;
pub mod type_panel;
pub mod video_panel;
