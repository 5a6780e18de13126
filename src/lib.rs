//! # Wordbook Library
//!
//! 单词释义查询与前缀自动补全：内存前缀树索引加上固定容量的先到先服务结果缓存。
//!
//! ## 模块组织
//!
//! - `normalize` - 查询键规范化
//! - `dataset` - 启动数据集解析
//! - `trie` - 前缀树索引
//! - `cache` - FCFS 结果缓存
//! - `service` - 缓存优先的查询服务
//! - `store` - 远程文档库查询模式
//! - `env` - 类型安全的环境变量配置
//! - `web` - Web服务器功能（可选）

pub mod cache;
pub mod dataset;
pub mod env;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod service;
pub mod store;
pub mod trie;
pub mod types;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used items for convenience
pub use cache::FcfsCache;
pub use dataset::{load_records, parse_records, DatasetRecord};
pub use error::{DictionaryError, DictionaryResult, ErrorCategory};
pub use normalize::normalize;
pub use service::{CacheStats, QueryService};
pub use store::{RecordStore, RemoteQueryService};
pub use trie::{TrieIndex, WordIndex};
pub use types::{Definition, LookupOutcome, NOT_FOUND_MESSAGE};
