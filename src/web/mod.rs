//! Web 服务器模块
//!
//! 通过 HTTP 提供单词查询、前缀补全和缓存管理，并托管前端静态页面

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use handlers::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::dataset::load_records;
use crate::env::{BackendKind, EnvError};
use crate::error::DictionaryError;
use crate::service::QueryService;
use crate::store::{MongoRecordStore, RemoteQueryService};
use crate::trie::TrieIndex;

/// Web 服务器启动与运行期间的错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("词典错误: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("配置错误: {0}")]
    Config(#[from] EnvError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("启动失败: {0}")]
    Startup(String),
}

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> Result<(), ServerError> {
        self.config.validate()?;

        let backend = build_backend(&self.config).await?;
        tracing::info!("查询后端: {}", backend.name());

        let app_state = Arc::new(AppState::new(backend));
        let app = create_router(app_state, &self.config);

        let address = self.config.listen_address();
        let listener = tokio::net::TcpListener::bind(&address).await?;

        tracing::info!("Web server starting at http://{}", address);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// 按配置构建查询后端
///
/// 前缀树模式下数据集解析与建树在阻塞线程池中完成。
pub async fn build_backend(config: &WebConfig) -> Result<Backend, ServerError> {
    match config.backend {
        BackendKind::Trie => {
            let dataset_path = config.dataset_path.clone();
            let index = tokio::task::spawn_blocking(move || {
                let records = load_records(&dataset_path)?;
                TrieIndex::from_records(records)
            })
            .await
            .map_err(|e| ServerError::Startup(format!("建树任务失败: {}", e)))??;

            let service = QueryService::new(Arc::new(index), config.cache_capacity)?;
            Ok(Backend::Trie(Arc::new(service)))
        }
        BackendKind::MongoDb => {
            let mongo_config = config
                .mongo_config
                .as_ref()
                .ok_or_else(|| ServerError::Startup("缺少 MongoDB 配置".to_string()))?;

            let store = MongoRecordStore::connect(mongo_config).await?;
            let service = RemoteQueryService::new(store, config.cache_capacity)?;
            Ok(Backend::Remote(Arc::new(service)))
        }
    }
}

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    if let Some(static_dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app.layer(CorsLayer::permissive())
}
