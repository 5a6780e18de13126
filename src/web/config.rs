//! Web 服务器配置
//!
//! 使用类型安全的环境变量系统进行配置管理

use std::path::PathBuf;

use crate::env::{BackendKind, EnvError, EnvResult, EnvVar};

/// MongoDB 配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    /// MongoDB 连接字符串
    pub connection_string: String,
    /// 数据库名称
    pub database_name: String,
    /// 集合名称
    pub collection_name: String,
}

impl MongoConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::mongodb;

        Ok(Self {
            connection_string: mongodb::ConnectionString::get()?,
            database_name: mongodb::DatabaseName::get()?,
            collection_name: mongodb::CollectionName::get()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.connection_string.is_empty() {
            return Err(EnvError::new("MONGODB_URL", "Connection string cannot be empty"));
        }

        if self.database_name.is_empty() {
            return Err(EnvError::new("MONGODB_DATABASE", "Database name cannot be empty"));
        }

        if self.collection_name.is_empty() {
            return Err(EnvError::new("MONGODB_COLLECTION", "Collection name cannot be empty"));
        }

        Ok(())
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!("Failed to load MongoDB config from environment: {}. Using defaults.", e);
            Self {
                connection_string: "mongodb://localhost:27017".to_string(),
                database_name: "dictionary".to_string(),
                collection_name: "dictionaries".to_string(),
            }
        })
    }
}

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 静态文件目录
    pub static_dir: Option<String>,
    /// 查询后端
    pub backend: BackendKind,
    /// 前缀树模式下加载的数据集
    pub dataset_path: PathBuf,
    /// FCFS 缓存容量
    pub cache_capacity: usize,
    /// MongoDB 配置，仅远程存储模式使用
    pub mongo_config: Option<MongoConfig>,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        use crate::env::{cache, core, dataset, web};

        let backend = core::Backend::get()?;
        let static_dir_str = web::StaticDir::get()?;
        let static_dir = if static_dir_str.is_empty() {
            None
        } else {
            Some(static_dir_str)
        };

        let mongo_config = match backend {
            BackendKind::MongoDb => Some(MongoConfig::from_env()?),
            BackendKind::Trie => None,
        };

        Ok(Self {
            bind_addr: web::BindAddress::get()?,
            port: web::Port::get()?,
            static_dir,
            backend,
            dataset_path: dataset::Path::get()?,
            cache_capacity: cache::Capacity::get()?,
            mongo_config,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError::new(
                "WORDBOOK_WEB_BIND_ADDRESS",
                "Bind address cannot be empty",
            ));
        }

        if self.port == 0 {
            return Err(EnvError::new("WORDBOOK_WEB_PORT", "Port cannot be 0"));
        }

        if self.cache_capacity == 0 {
            return Err(EnvError::new(
                "WORDBOOK_CACHE_CAPACITY",
                "Cache capacity must be greater than 0",
            ));
        }

        if let Some(ref static_dir) = self.static_dir {
            if !std::path::Path::new(static_dir).exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        match self.backend {
            BackendKind::Trie => {
                if !self.dataset_path.exists() {
                    return Err(EnvError::new(
                        "WORDBOOK_DATASET_PATH",
                        format!("Dataset '{}' does not exist", self.dataset_path.display()),
                    ));
                }
            }
            BackendKind::MongoDb => match self.mongo_config {
                Some(ref mongo_config) => mongo_config.validate()?,
                None => {
                    return Err(EnvError::new(
                        "MONGODB_URL",
                        "MongoDB backend selected but no MongoDB configuration given",
                    ))
                }
            },
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            tracing::warn!("Failed to load web config from environment: {}. Using defaults.", e);
            Self {
                bind_addr: "127.0.0.1".to_string(),
                port: 3000,
                static_dir: Some("public".to_string()),
                backend: BackendKind::Trie,
                dataset_path: PathBuf::from("util/data.json"),
                cache_capacity: 10,
                mongo_config: None,
            }
        })
    }
}
