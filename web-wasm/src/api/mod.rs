//! リモート解析サービスとの通信

pub mod analyze;
