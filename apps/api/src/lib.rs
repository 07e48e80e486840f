//! # Cosmic API
//!
//! 科学者・惑星・ミッションを扱う REST API。
//!
//! ## 設計方針
//!
//! - **レイヤー分離**: handler → usecase → repository（infra）→ domain の順に依存する
//! - **ビュー型**: エンドポイントごとに出力フィールドを固定し、一覧と詳細で形を変える
//! - **エラー変換**: 各層のエラーを [`error::ApiError`] に集約し、固定の JSON ボディで返す
//!
//! ## モジュール構成
//!
//! - [`app`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラーと HTTP レスポンスへの変換
//! - [`extract`] - JSON ボディとパス ID の抽出
//! - [`handler`] - HTTP ハンドラとビュー型
//! - [`usecase`] - ビジネスロジック

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod usecase;

pub use app::build_router;
