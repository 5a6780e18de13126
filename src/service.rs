//! # 查询服务
//!
//! 先查 FCFS 缓存，未命中时回落到索引，并把结果（包括查无此词）写回缓存。
//! 自动补全直接走索引，不读也不写缓存。
//!
//! 缓存的成员表和插入顺序必须一起修改，所以整个缓存由一把互斥锁保护，
//! 锁只在单次 get 或 put 期间持有；索引只读，遍历时不加锁。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use serde::Serialize;

use crate::cache::FcfsCache;
use crate::error::DictionaryResult;
use crate::normalize::normalize;
use crate::trie::WordIndex;
use crate::types::LookupOutcome;

/// 规范化后的查询词到查询结果的缓存
pub type OutcomeCache = FcfsCache<String, LookupOutcome>;

/// 缓存统计信息
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub capacity: usize,
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub suggestions: u64,
}

impl CacheStats {
    /// 计算命中率
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    suggestions: AtomicU64,
}

impl Counters {
    pub(crate) fn snapshot(&self, cache: &OutcomeCache) -> CacheStats {
        CacheStats {
            capacity: cache.capacity(),
            total_entries: cache.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            suggestions: self.suggestions.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_suggestion(&self) {
        self.suggestions.fetch_add(1, Ordering::Relaxed);
    }
}

/// 取得缓存锁；持锁线程 panic 后缓存内容仍然一致，直接继续使用
pub(crate) fn lock_cache(cache: &Mutex<OutcomeCache>) -> MutexGuard<'_, OutcomeCache> {
    cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 缓存加索引的查询服务
pub struct QueryService<I> {
    index: Arc<I>,
    cache: Mutex<OutcomeCache>,
    counters: Counters,
}

impl<I: WordIndex> QueryService<I> {
    /// 创建查询服务，缓存容量为 0 时返回 `ZeroCapacity`
    pub fn new(index: Arc<I>, cache_capacity: usize) -> DictionaryResult<Self> {
        Ok(Self {
            index,
            cache: Mutex::new(FcfsCache::new(cache_capacity)?),
            counters: Counters::default(),
        })
    }

    pub fn index(&self) -> &Arc<I> {
        &self.index
    }

    /// 查询单词释义
    pub fn lookup(&self, raw_word: &str) -> DictionaryResult<LookupOutcome> {
        let start = Instant::now();
        let key = normalize(raw_word)?;

        let cached = lock_cache(&self.cache).get(&key).cloned();
        if let Some(cached) = cached {
            self.counters.record_hit();
            tracing::debug!(word = %key, "Cache Hit");
            return Ok(cached);
        }

        self.counters.record_miss();
        tracing::debug!(word = %key, "Cache Miss");

        // 遍历索引时不持有缓存锁；并发未命中同一个键时后写入的结果原位覆盖
        let outcome = LookupOutcome::from(self.index.definition_of(&key));
        if let Some(evicted) = lock_cache(&self.cache).put(key.clone(), outcome.clone()) {
            self.counters.record_eviction();
            tracing::trace!(evicted = %evicted, "淘汰最早写入的缓存条目");
        }

        tracing::debug!(word = %key, elapsed_us = start.elapsed().as_micros() as u64, "查询完成");
        Ok(outcome)
    }

    /// 前缀自动补全，不经过缓存
    pub fn suggest(&self, raw_prefix: &str) -> DictionaryResult<Vec<String>> {
        let prefix = normalize(raw_prefix)?;
        self.counters.record_suggestion();

        let suggestions = self.index.words_with_prefix(&prefix);
        tracing::debug!(prefix = %prefix, count = suggestions.len(), "自动补全完成");
        Ok(suggestions)
    }

    /// 获取统计信息
    pub fn stats(&self) -> CacheStats {
        let cache = lock_cache(&self.cache);
        self.counters.snapshot(&cache)
    }

    /// 清空缓存，返回清除的条目数
    pub fn clear_cache(&self) -> usize {
        let removed = lock_cache(&self.cache).clear();
        tracing::info!("已清理 {} 个缓存条目", removed);
        removed
    }

    /// 缓存中是否已有该查询词的结果
    pub fn is_cached(&self, raw_word: &str) -> DictionaryResult<bool> {
        let key = normalize(raw_word)?;
        Ok(lock_cache(&self.cache).contains_key(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictionaryError;
    use crate::trie::TrieIndex;
    use crate::types::Definition;

    fn service(capacity: usize) -> QueryService<TrieIndex> {
        let mut index = TrieIndex::new();
        index.insert("Cat", "a feline", "The cat sat.", "").unwrap();
        index.insert("Car", "a vehicle", "", "").unwrap();
        QueryService::new(Arc::new(index), capacity).unwrap()
    }

    #[test]
    fn test_lookup_found_and_not_found() {
        let service = service(4);

        assert_eq!(
            service.lookup("cat").unwrap(),
            LookupOutcome::Found(Definition::new("a feline", "The cat sat.", ""))
        );
        assert_eq!(service.lookup("dog").unwrap(), LookupOutcome::not_found());
    }

    #[test]
    fn test_cache_key_is_normalized() {
        let service = service(4);

        service.lookup("  CAT ").unwrap();
        assert!(service.is_cached("cat").unwrap());

        service.lookup("cat").unwrap();
        let stats = service.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_negative_results_are_cached() {
        let service = service(4);

        service.lookup("dog").unwrap();
        assert!(service.is_cached("dog").unwrap());
        assert_eq!(service.lookup("dog").unwrap(), LookupOutcome::not_found());
        assert_eq!(service.stats().hits, 1);
    }

    #[test]
    fn test_eviction_is_counted() {
        let service = service(1);

        service.lookup("cat").unwrap();
        service.lookup("car").unwrap();

        let stats = service.stats();
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 1);
        assert!(!service.is_cached("cat").unwrap());
    }

    #[test]
    fn test_suggest_bypasses_cache() {
        let service = service(4);

        assert_eq!(service.suggest("ca").unwrap(), vec!["Cat", "Car"]);
        assert!(service.suggest("z").unwrap().is_empty());

        let stats = service.stats();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.suggestions, 2);
        assert_eq!(stats.hits + stats.misses, 0);
    }

    #[test]
    fn test_invalid_input() {
        let service = service(4);
        assert!(matches!(service.lookup(""), Err(DictionaryError::InvalidInput(_))));
        assert!(matches!(service.suggest(" "), Err(DictionaryError::InvalidInput(_))));
        assert_eq!(service.stats().misses, 0);
    }

    #[test]
    fn test_zero_capacity() {
        let result = QueryService::new(Arc::new(TrieIndex::new()), 0);
        assert!(matches!(result, Err(DictionaryError::ZeroCapacity)));
    }

    #[test]
    fn test_clear_cache() {
        let service = service(4);
        service.lookup("cat").unwrap();
        service.lookup("dog").unwrap();

        assert_eq!(service.clear_cache(), 2);
        assert_eq!(service.stats().total_entries, 0);
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }
}
