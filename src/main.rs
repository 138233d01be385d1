use axum::{
    routing::{get, post},
    Router,
};
use receipt_points_rust::{api, AppConfig, MemoryReceiptStore, ReceiptStore};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 创建进程内存储 (无持久化)
    let store: Arc<dyn ReceiptStore> = Arc::new(MemoryReceiptStore::new());

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/receipts/process", post(api::process_receipt))
        .route("/receipts/:id/points", get(api::get_points))
        .layer(ServiceBuilder::new())
        .with_state(store);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /receipts/process    - score a receipt, returns generated id");
    info!("  GET  /receipts/:id/points - query points and breakdown by id");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
