//! # 远程存储模式
//!
//! 词典数据太大或需要集中更新时，不构建前缀树，而是按精确键查询远程文档库。
//! 这种模式同样经过 FCFS 缓存，但不提供前缀自动补全。

#[cfg(feature = "web")]
pub mod mongo;

#[cfg(feature = "web")]
pub use mongo::{DictionaryDocument, MongoRecordStore};

use std::sync::Mutex;

use futures::future::BoxFuture;

use crate::cache::FcfsCache;
use crate::error::{DictionaryError, DictionaryResult};
use crate::normalize::normalize;
use crate::service::{lock_cache, CacheStats, Counters, OutcomeCache};
use crate::types::{Definition, LookupOutcome};

/// 按精确键查询的远程记录存储
pub trait RecordStore: Send + Sync {
    /// 查找规范化后的单词，不存在时返回 `Ok(None)`
    fn find_one<'a>(&'a self, word: &'a str) -> BoxFuture<'a, DictionaryResult<Option<Definition>>>;
}

/// 基于远程存储的查询服务
pub struct RemoteQueryService<S> {
    store: S,
    cache: Mutex<OutcomeCache>,
    counters: Counters,
}

impl<S: RecordStore> RemoteQueryService<S> {
    pub fn new(store: S, cache_capacity: usize) -> DictionaryResult<Self> {
        Ok(Self {
            store,
            cache: Mutex::new(FcfsCache::new(cache_capacity)?),
            counters: Counters::default(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 查询单词释义
    ///
    /// 存储查询期间不持有缓存锁；存储出错时不写缓存，错误直接返回。
    pub async fn lookup(&self, raw_word: &str) -> DictionaryResult<LookupOutcome> {
        let key = normalize(raw_word)?;

        let cached = lock_cache(&self.cache).get(&key).cloned();
        if let Some(cached) = cached {
            self.counters.record_hit();
            tracing::debug!(word = %key, "Cache Hit");
            return Ok(cached);
        }

        self.counters.record_miss();
        tracing::debug!(word = %key, "Cache Miss");

        let outcome = LookupOutcome::from(self.store.find_one(&key).await?);
        if lock_cache(&self.cache).put(key, outcome.clone()).is_some() {
            self.counters.record_eviction();
        }
        Ok(outcome)
    }

    /// 远程存储模式不支持前缀补全
    pub fn suggest(&self, raw_prefix: &str) -> DictionaryResult<Vec<String>> {
        normalize(raw_prefix)?;
        Err(DictionaryError::Unsupported(
            "远程存储模式不提供自动补全".to_string(),
        ))
    }

    pub fn stats(&self) -> CacheStats {
        let cache = lock_cache(&self.cache);
        self.counters.snapshot(&cache)
    }

    pub fn clear_cache(&self) -> usize {
        let removed = lock_cache(&self.cache).clear();
        tracing::info!("已清理 {} 个缓存条目", removed);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MemoryStore {
        records: HashMap<String, Definition>,
        queries: AtomicUsize,
        fail: bool,
    }

    impl RecordStore for MemoryStore {
        fn find_one<'a>(
            &'a self,
            word: &'a str,
        ) -> BoxFuture<'a, DictionaryResult<Option<Definition>>> {
            async move {
                self.queries.fetch_add(1, Ordering::SeqCst);
                if self.fail {
                    return Err(DictionaryError::Store("connection refused".to_string()));
                }
                Ok(self.records.get(word).cloned())
            }
            .boxed()
        }
    }

    fn store_with_cat() -> MemoryStore {
        let mut records = HashMap::new();
        records.insert("Cat".to_string(), Definition::new("a feline", "The cat sat.", ""));
        MemoryStore {
            records,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_remote_lookup_uses_cache() {
        let service = RemoteQueryService::new(store_with_cat(), 10).unwrap();

        let first = service.lookup("cat").await.unwrap();
        let second = service.lookup("CAT").await.unwrap();

        assert_eq!(first, second);
        assert!(first.is_found());
        assert_eq!(service.store().queries.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remote_negative_result_cached() {
        let service = RemoteQueryService::new(store_with_cat(), 10).unwrap();

        assert_eq!(service.lookup("dog").await.unwrap(), LookupOutcome::not_found());
        assert_eq!(service.lookup("dog").await.unwrap(), LookupOutcome::not_found());
        assert_eq!(service.store().queries.load(Ordering::SeqCst), 1);
        assert_eq!(service.stats().hits, 1);
    }

    #[tokio::test]
    async fn test_remote_store_error_not_cached() {
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let service = RemoteQueryService::new(store, 10).unwrap();

        assert!(matches!(
            service.lookup("cat").await,
            Err(DictionaryError::Store(_))
        ));
        assert_eq!(service.stats().total_entries, 0);
    }

    #[test]
    fn test_remote_suggest_unsupported() {
        let service = RemoteQueryService::new(store_with_cat(), 10).unwrap();

        assert!(matches!(service.suggest("ca"), Err(DictionaryError::Unsupported(_))));
        assert!(matches!(service.suggest(""), Err(DictionaryError::InvalidInput(_))));
    }
}
