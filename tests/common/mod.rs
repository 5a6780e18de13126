// 集成测试公共模块
//
// 提供测试数据集和可计数的索引包装

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tempfile::NamedTempFile;

use wordbook::{Definition, QueryService, TrieIndex, WordIndex};

/// 仓库内的测试数据集
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("words.json")
}

/// 测试数据生成器
pub struct TestDataGenerator;

impl TestDataGenerator {
    /// 使用规范字段名的数据集
    pub fn canonical_dataset() -> &'static str {
        r#"[
            {"word": "tree", "meaning": "A woody perennial plant.", "usage1": "Sit under the tree.", "usage2": "The tree lost its leaves."},
            {"word": "trie", "meaning": "A prefix tree.", "usage1": "Build a trie.", "usage2": "The trie answers prefix queries."},
            {"word": "trip", "meaning": "A journey.", "usage1": "A short trip.", "usage2": "The trip was long."}
        ]"#
    }

    /// 第二条记录缺少释义
    pub fn dataset_missing_meaning() -> &'static str {
        r#"[
            {"Word": "ok", "Meaning": "fine"},
            {"Word": "broken"}
        ]"#
    }

    /// 写入临时文件
    pub fn write_temp(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(json.as_bytes())
            .expect("Failed to write temp dataset");
        file
    }

    /// 按 (单词, 释义) 构建前缀树
    pub fn index_of(words: &[(&str, &str)]) -> TrieIndex {
        let mut index = TrieIndex::new();
        for (word, meaning) in words {
            index
                .insert(*word, *meaning, "", "")
                .expect("Failed to insert test word");
        }
        index
    }
}

/// 记录调用次数的索引包装
pub struct CountingIndex {
    inner: TrieIndex,
    lookups: AtomicUsize,
    prefix_queries: AtomicUsize,
}

impl CountingIndex {
    pub fn new(inner: TrieIndex) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
            prefix_queries: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn prefix_queries(&self) -> usize {
        self.prefix_queries.load(Ordering::SeqCst)
    }
}

impl WordIndex for CountingIndex {
    fn definition_of(&self, key: &str) -> Option<Definition> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.definition_of(key)
    }

    fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.prefix_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.words_with_prefix(prefix)
    }
}

/// 创建带计数索引的查询服务
pub fn counting_service(
    words: &[(&str, &str)],
    capacity: usize,
) -> (QueryService<CountingIndex>, Arc<CountingIndex>) {
    let index = Arc::new(CountingIndex::new(TestDataGenerator::index_of(words)));
    let service = QueryService::new(Arc::clone(&index), capacity)
        .expect("Failed to create query service");
    (service, index)
}
