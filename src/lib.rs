//! vindex - Azure Video Indexer アカウントの動画一覧CLI
//!
//! サブスクリプションキーで短命のアクセストークンを取得し、
//! そのトークンでアカウント内の動画一覧を取得して、
//! 整形したJSONを標準出力に書き出す。

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error_severity;
pub mod presentation;
