//! Web 模块的数据类型定义

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DictionaryResult;
use crate::service::{CacheStats, QueryService};
use crate::store::{MongoRecordStore, RemoteQueryService};
use crate::trie::TrieIndex;
use crate::types::LookupOutcome;

/// 当前部署使用的查询后端
#[derive(Clone)]
pub enum Backend {
    /// 内存前缀树，支持自动补全
    Trie(Arc<QueryService<TrieIndex>>),
    /// 远程文档库，仅支持精确查询
    Remote(Arc<RemoteQueryService<MongoRecordStore>>),
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Trie(_) => "trie",
            Backend::Remote(_) => "mongodb",
        }
    }

    pub async fn lookup(&self, word: &str) -> DictionaryResult<LookupOutcome> {
        match self {
            Backend::Trie(service) => service.lookup(word),
            Backend::Remote(service) => service.lookup(word).await,
        }
    }

    pub fn suggest(&self, prefix: &str) -> DictionaryResult<Vec<String>> {
        match self {
            Backend::Trie(service) => service.suggest(prefix),
            Backend::Remote(service) => service.suggest(prefix),
        }
    }

    pub fn stats(&self) -> CacheStats {
        match self {
            Backend::Trie(service) => service.stats(),
            Backend::Remote(service) => service.stats(),
        }
    }

    pub fn clear_cache(&self) -> usize {
        match self {
            Backend::Trie(service) => service.clear_cache(),
            Backend::Remote(service) => service.clear_cache(),
        }
    }
}

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

/// 查询与补全请求，`word` 既可以来自查询串也可以来自 JSON 请求体
#[derive(Debug, Default, Deserialize)]
pub struct WordRequest {
    pub word: Option<String>,
}

/// 自动补全响应
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// 缓存统计响应
#[derive(Debug, Serialize)]
pub struct CacheStatsResponse {
    pub backend: &'static str,
    pub capacity: usize,
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub suggestions: u64,
    pub hit_rate: f64,
}

impl CacheStatsResponse {
    pub fn new(backend: &'static str, stats: CacheStats) -> Self {
        Self {
            backend,
            capacity: stats.capacity,
            total_entries: stats.total_entries,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            suggestions: stats.suggestions,
            hit_rate: stats.hit_rate(),
        }
    }
}
