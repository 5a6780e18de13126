//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量管理

use std::env;
use std::fmt;
use std::path::PathBuf;

/// 环境变量解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl EnvError {
    pub fn new(variable: &str, message: impl Into<String>) -> Self {
        Self {
            variable: variable.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    /// 未设置时使用的默认值，`None` 表示必须设置
    fn default_value() -> Option<T>;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::default_value()
                .ok_or_else(|| EnvError::new(Self::NAME, "Required environment variable not set")),
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 后端模式：内存前缀树或远程文档库
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Trie,
    MongoDb,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Trie => write!(f, "trie"),
            BackendKind::MongoDb => write!(f, "mongodb"),
        }
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 应用运行模式
    pub struct Mode;
    impl EnvVar<String> for Mode {
        const NAME: &'static str = "WORDBOOK_MODE";
        const DESCRIPTION: &'static str = "Application mode: development, staging, production";

        fn default_value() -> Option<String> {
            Some("production".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "development" | "dev" => Ok("development".to_string()),
                "staging" | "stage" => Ok("staging".to_string()),
                "production" | "prod" => Ok("production".to_string()),
                _ => Err(EnvError::new(
                    Self::NAME,
                    format!("Invalid mode '{}'. Use: development, staging, production", value),
                )),
            }
        }
    }

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "WORDBOOK_LOG_LEVEL";
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn default_value() -> Option<String> {
            Some("info".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError::new(
                    Self::NAME,
                    format!("Invalid log level '{}'. Use: trace, debug, info, warn, error", value),
                )),
            }
        }
    }

    /// 查询后端
    pub struct Backend;
    impl EnvVar<BackendKind> for Backend {
        const NAME: &'static str = "WORDBOOK_BACKEND";
        const DESCRIPTION: &'static str = "Lookup backend: trie (in-memory, with autocomplete) or mongodb";

        fn default_value() -> Option<BackendKind> {
            Some(BackendKind::Trie)
        }

        fn parse(value: &str) -> EnvResult<BackendKind> {
            match value.trim().to_lowercase().as_str() {
                "trie" | "memory" => Ok(BackendKind::Trie),
                "mongodb" | "mongo" => Ok(BackendKind::MongoDb),
                _ => Err(EnvError::new(
                    Self::NAME,
                    format!("Invalid backend '{}'. Use: trie, mongodb", value),
                )),
            }
        }
    }
}

/// 数据集相关环境变量
pub mod dataset {
    use super::*;

    /// 数据集文件路径
    pub struct Path;
    impl EnvVar<PathBuf> for Path {
        const NAME: &'static str = "WORDBOOK_DATASET_PATH";
        const DESCRIPTION: &'static str = "JSON dataset loaded into the trie at startup";

        fn default_value() -> Option<PathBuf> {
            Some(PathBuf::from("util/data.json"))
        }

        fn parse(value: &str) -> EnvResult<PathBuf> {
            let path = value.trim();
            if path.is_empty() {
                return Err(EnvError::new(Self::NAME, "Dataset path cannot be empty"));
            }
            Ok(PathBuf::from(path))
        }
    }
}

/// 缓存相关环境变量
pub mod cache {
    use super::*;

    /// 缓存容量
    pub struct Capacity;
    impl EnvVar<usize> for Capacity {
        const NAME: &'static str = "WORDBOOK_CACHE_CAPACITY";
        const DESCRIPTION: &'static str = "FCFS result cache capacity (number of entries)";

        fn default_value() -> Option<usize> {
            Some(10)
        }

        fn parse(value: &str) -> EnvResult<usize> {
            parse_positive_usize(value, Self::NAME, 1, 1_000_000)
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "WORDBOOK_WEB_BIND_ADDRESS";
        const DESCRIPTION: &'static str = "Web server bind address";

        fn default_value() -> Option<String> {
            Some("127.0.0.1".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError::new(Self::NAME, "Address cannot be empty"));
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "WORDBOOK_WEB_PORT";
        const DESCRIPTION: &'static str = "Web server port";

        fn default_value() -> Option<u16> {
            Some(3000)
        }

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value
                .trim()
                .parse()
                .map_err(|_| EnvError::new(Self::NAME, "Must be a valid port number (1-65535)"))?;

            if port == 0 {
                return Err(EnvError::new(Self::NAME, "Port cannot be 0"));
            }

            Ok(port)
        }
    }

    /// 静态文件目录
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "WORDBOOK_WEB_STATIC_DIR";
        const DESCRIPTION: &'static str = "Static files directory (empty disables static serving)";

        fn default_value() -> Option<String> {
            Some("public".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }
}

/// MongoDB相关环境变量
pub mod mongodb {
    use super::*;

    /// MongoDB连接字符串
    pub struct ConnectionString;
    impl EnvVar<String> for ConnectionString {
        const NAME: &'static str = "MONGODB_URL";
        const DESCRIPTION: &'static str = "MongoDB connection string";

        fn default_value() -> Option<String> {
            Some("mongodb://localhost:27017".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            let url = value.trim();
            if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
                Ok(url.to_string())
            } else {
                Err(EnvError::new(
                    Self::NAME,
                    "MongoDB URL must start with mongodb:// or mongodb+srv://",
                ))
            }
        }
    }

    /// 数据库名称
    pub struct DatabaseName;
    impl EnvVar<String> for DatabaseName {
        const NAME: &'static str = "MONGODB_DATABASE";
        const DESCRIPTION: &'static str = "MongoDB database name";

        fn default_value() -> Option<String> {
            Some("dictionary".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            non_empty(value, Self::NAME, "Database name cannot be empty")
        }
    }

    /// 集合名称
    pub struct CollectionName;
    impl EnvVar<String> for CollectionName {
        const NAME: &'static str = "MONGODB_COLLECTION";
        const DESCRIPTION: &'static str = "MongoDB collection name";

        fn default_value() -> Option<String> {
            Some("dictionaries".to_string())
        }

        fn parse(value: &str) -> EnvResult<String> {
            non_empty(value, Self::NAME, "Collection name cannot be empty")
        }
    }
}

/// 辅助函数
fn non_empty(value: &str, var_name: &str, message: &str) -> EnvResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EnvError::new(var_name, message));
    }
    Ok(trimmed.to_string())
}

fn parse_positive_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value
        .trim()
        .parse()
        .map_err(|_| EnvError::new(var_name, "Must be a valid positive number"))?;

    if num < min {
        return Err(EnvError::new(
            var_name,
            format!("Value {} is below minimum {}", num, min),
        ));
    }

    if num > max {
        return Err(EnvError::new(
            var_name,
            format!("Value {} exceeds maximum {}", num, max),
        ));
    }

    Ok(num)
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    // 核心配置
    pub mode: String,
    pub log_level: String,
    pub backend: BackendKind,

    // 数据与缓存
    pub dataset_path: PathBuf,
    pub cache_capacity: usize,

    // Web配置
    pub web_bind_address: String,
    pub web_port: u16,
    pub web_static_dir: String,

    // MongoDB配置
    pub mongodb_connection_string: String,
    pub mongodb_database_name: String,
    pub mongodb_collection_name: String,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            mode: core::Mode::get()?,
            log_level: core::LogLevel::get()?,
            backend: core::Backend::get()?,

            dataset_path: dataset::Path::get()?,
            cache_capacity: cache::Capacity::get()?,

            web_bind_address: web::BindAddress::get()?,
            web_port: web::Port::get()?,
            web_static_dir: web::StaticDir::get()?,

            mongodb_connection_string: mongodb::ConnectionString::get()?,
            mongodb_database_name: mongodb::DatabaseName::get()?,
            mongodb_collection_name: mongodb::CollectionName::get()?,
        })
    }

    /// 是否为本地开发模式
    pub fn is_development(&self) -> bool {
        self.mode == "development"
    }

    /// 打印配置摘要（隐藏连接串）
    pub fn print_summary(&self) {
        println!("Environment Configuration Summary:");
        println!("  Mode: {}", self.mode);
        println!("  Log Level: {}", self.log_level);
        println!("  Backend: {}", self.backend);
        println!("  Cache Capacity: {}", self.cache_capacity);
        match self.backend {
            BackendKind::Trie => println!("  Dataset: {}", self.dataset_path.display()),
            BackendKind::MongoDb => println!(
                "  MongoDB: [configured] {}/{}",
                self.mongodb_database_name, self.mongodb_collection_name
            ),
        }
        println!("  Web Server: {}:{}", self.web_bind_address, self.web_port);
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    fn line<V: EnvVar<T>, T: fmt::Debug>(docs: &mut String) {
        docs.push_str(&format!(
            "- `{}`: {} (default: {:?})\n",
            V::NAME,
            V::DESCRIPTION,
            V::default_value()
        ));
    }

    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    line::<core::Mode, String>(&mut docs);
    line::<core::LogLevel, String>(&mut docs);
    line::<core::Backend, BackendKind>(&mut docs);

    docs.push_str("\n## Dataset & Cache Configuration\n\n");
    line::<dataset::Path, PathBuf>(&mut docs);
    line::<cache::Capacity, usize>(&mut docs);

    docs.push_str("\n## Web Server Configuration\n\n");
    line::<web::BindAddress, String>(&mut docs);
    line::<web::Port, u16>(&mut docs);
    line::<web::StaticDir, String>(&mut docs);

    docs.push_str("\n## MongoDB Configuration\n\n");
    line::<mongodb::ConnectionString, String>(&mut docs);
    line::<mongodb::DatabaseName, String>(&mut docs);
    line::<mongodb::CollectionName, String>(&mut docs);

    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_mode_parsing() {
        assert_eq!(core::Mode::parse("development").unwrap(), "development");
        assert_eq!(core::Mode::parse("PRODUCTION").unwrap(), "production");
        assert_eq!(core::Mode::parse("stage").unwrap(), "staging");

        assert!(core::Mode::parse("invalid").is_err());
    }

    #[test]
    fn test_backend_parsing() {
        assert_eq!(core::Backend::parse("trie").unwrap(), BackendKind::Trie);
        assert_eq!(core::Backend::parse(" Mongo ").unwrap(), BackendKind::MongoDb);
        assert!(core::Backend::parse("redis").is_err());
    }

    #[test]
    fn test_cache_capacity_validation() {
        assert_eq!(cache::Capacity::parse("1").unwrap(), 1);
        assert_eq!(cache::Capacity::parse("250").unwrap(), 250);

        assert!(cache::Capacity::parse("0").is_err());
        assert!(cache::Capacity::parse("-3").is_err());
        assert!(cache::Capacity::parse("lots").is_err());
        assert!(cache::Capacity::parse("2000000").is_err());
    }

    #[test]
    fn test_port_validation() {
        assert_eq!(web::Port::parse("3000").unwrap(), 3000);
        assert!(web::Port::parse("0").is_err());
        assert!(web::Port::parse("70000").is_err());
    }

    #[test]
    fn test_url_validation() {
        assert!(mongodb::ConnectionString::parse("mongodb://localhost:27017").is_ok());
        assert!(mongodb::ConnectionString::parse("mongodb+srv://cluster.example.net/dictionary").is_ok());

        assert!(mongodb::ConnectionString::parse("http://localhost").is_err());
    }

    #[test]
    fn test_env_config_loading() {
        env::set_var("WORDBOOK_BACKEND", "mongodb");
        env::set_var("WORDBOOK_CACHE_CAPACITY", "42");
        env::set_var("WORDBOOK_DATASET_PATH", "fixtures/words.json");

        let config = EnvConfig::from_env().unwrap();
        assert_eq!(config.backend, BackendKind::MongoDb);
        assert_eq!(config.cache_capacity, 42);
        assert_eq!(config.dataset_path, PathBuf::from("fixtures/words.json"));

        env::remove_var("WORDBOOK_BACKEND");
        env::remove_var("WORDBOOK_CACHE_CAPACITY");
        env::remove_var("WORDBOOK_DATASET_PATH");
    }

    #[test]
    fn test_env_docs_generation() {
        let docs = generate_env_docs();
        assert!(docs.contains("WORDBOOK_CACHE_CAPACITY"));
        assert!(docs.contains("MONGODB_URL"));
        assert!(docs.contains("Some(10)"));
    }
}
