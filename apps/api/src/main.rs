//! # Cosmic API サーバー
//!
//! 科学者・惑星・ミッションを扱う REST API サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DB_URI` | No | SQLite 接続 URL（デフォルト: `sqlite://app.db`） |
//! | `API_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `5555`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,cosmic=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p cosmic-api --bin cosmic-api
//!
//! # 惑星などの初期データを投入
//! cargo run -p cosmic-api --bin cosmic-seed
//! ```

use anyhow::Context;
use cosmic_api::{build_router, config::ApiConfig};
use cosmic_infra::db;
use cosmic_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let _tracing_guard = init_tracing(TracingConfig::from_env("cosmic-api"));

    // 設定読み込み
    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!("API サーバーを起動します: {}", config.bind_address());

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // マイグレーション実行
    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    let app = build_router(pool);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} にバインドできません", config.bind_address()))?;
    tracing::info!("API サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API サーバーを停止しました");
    Ok(())
}

/// Ctrl+C を待つ
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シグナルハンドラを登録できません");
    }
}
