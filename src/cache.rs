//! 先到先服务（FCFS）结果缓存
//!
//! 固定容量，按插入顺序淘汰最早写入的条目。读取不会改变淘汰顺序，
//! 覆盖已有键也不会刷新其位置。

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::error::{DictionaryError, DictionaryResult};

/// 固定容量的 FCFS 缓存
#[derive(Debug, Clone)]
pub struct FcfsCache<K, V> {
    capacity: NonZeroUsize,
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> FcfsCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// 创建指定容量的空缓存，容量为 0 时返回 `ZeroCapacity`
    pub fn new(capacity: usize) -> DictionaryResult<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(DictionaryError::ZeroCapacity)?;

        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity.get()),
            order: VecDeque::with_capacity(capacity.get()),
        })
    }

    /// 获取缓存项，没有副作用
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// 写入缓存项
    ///
    /// 已存在的键只覆盖值。新键在缓存已满时先淘汰最早写入的一个条目，
    /// 返回被淘汰的键。
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Entry::Occupied(mut slot) = self.entries.entry(key.clone()) {
            slot.insert(value);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity.get() {
            self.evict_oldest()
        } else {
            None
        };

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        evicted
    }

    fn evict_oldest(&mut self) -> Option<K> {
        let oldest = self.order.pop_front()?;
        self.entries.remove(&oldest);
        Some(oldest)
    }

    /// 检查是否包含指定键
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// 清空缓存，返回被清除的条目数
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        removed
    }

    /// 按插入顺序（最早的在前）返回所有键
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }
}
