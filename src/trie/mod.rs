//! # 前缀树索引
//!
//! 内存中的字符前缀树，在单词结束的节点上保存释义和例句。
//!
//! 节点统一存放在索引持有的数组中，父节点通过 `NodeId` 拥有子节点，
//! 子节点对父节点的引用只是一个不拥有所有权的下标，因此结构中不存在环。
//!
//! 索引在启动时一次性构建，之后只读；并发读取不需要加锁。

mod node;

pub use node::{NodeId, TrieNode};

use crate::dataset::DatasetRecord;
use crate::error::DictionaryResult;
use crate::normalize::normalize;
use crate::types::Definition;

/// 查询服务依赖的索引接口
///
/// 传入的键已经过规范化。
pub trait WordIndex: Send + Sync {
    /// 精确查找单词的释义
    fn definition_of(&self, key: &str) -> Option<Definition>;

    /// 列出以 `prefix` 开头的全部单词
    fn words_with_prefix(&self, prefix: &str) -> Vec<String>;
}

/// 前缀树索引
#[derive(Debug, Clone)]
pub struct TrieIndex {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieIndex {
    /// 创建只有根节点的空索引
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            word_count: 0,
        }
    }

    /// 按数据集顺序批量构建索引，重复单词以最后一次为准
    pub fn from_records<I>(records: I) -> DictionaryResult<Self>
    where
        I: IntoIterator<Item = DatasetRecord>,
    {
        let mut index = Self::new();
        for record in records {
            index.insert(&record.word, record.meaning, record.example1, record.example2)?;
        }

        tracing::info!(
            "前缀树构建完成: {} 个单词, {} 个节点",
            index.word_count,
            index.nodes.len()
        );
        Ok(index)
    }

    /// 插入单词，覆盖同一单词之前的释义
    ///
    /// time complexity: O(k), k = word length
    pub fn insert(
        &mut self,
        word: &str,
        meaning: impl Into<String>,
        usage1: impl Into<String>,
        usage2: impl Into<String>,
    ) -> DictionaryResult<()> {
        let key = normalize(word)?;
        let mut current = NodeId::ROOT;

        for c in key.chars() {
            current = match self.node(current).child(c) {
                Some(child) => child,
                None => self.push_child(current, c),
            };
        }

        let definition = Definition::new(meaning, usage1, usage2);
        if self.node_mut(current).set_definition(definition).is_none() {
            self.word_count += 1;
        }
        Ok(())
    }

    /// 精确查找单词释义
    ///
    /// 路径中断或末节点不是单词结尾时返回 `None`。
    pub fn lookup_meaning(&self, word: &str) -> DictionaryResult<Option<&Definition>> {
        let key = normalize(word)?;
        Ok(self.definition_for_key(&key))
    }

    /// 是否包含完整单词
    pub fn contains_word(&self, word: &str) -> DictionaryResult<bool> {
        let key = normalize(word)?;
        Ok(self.definition_for_key(&key).is_some())
    }

    /// 返回所有以 `prefix` 开头的单词
    ///
    /// 深度优先遍历前缀节点下的子树，子节点按字符升序访问，
    /// 后发现的单词排在前面。
    pub fn autocomplete(&self, prefix: &str) -> DictionaryResult<Vec<String>> {
        let key = normalize(prefix)?;
        Ok(self.words_for_prefix(&key))
    }

    /// 已存储的不同单词数量
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// 节点总数（含根节点）
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    fn push_child(&mut self, parent: NodeId, key: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::child_of(parent, key));
        self.node_mut(parent).add_child(key, id);
        id
    }

    /// 沿字符路径下行，路径中断返回 `None`
    fn find_node(&self, key: &str) -> Option<NodeId> {
        key.chars()
            .try_fold(NodeId::ROOT, |current, c| self.node(current).child(c))
    }

    fn definition_for_key(&self, key: &str) -> Option<&Definition> {
        self.find_node(key)
            .and_then(|id| self.node(id).definition())
    }

    fn words_for_prefix(&self, key: &str) -> Vec<String> {
        let Some(start) = self.find_node(key) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_terminal() {
                found.push(self.word_at(id));
            }
            stack.extend(node.children().rev());
        }

        found.reverse();
        found
    }

    /// 沿父节点回指重建单词
    ///
    /// time complexity: O(k), k = word length
    pub fn word_at(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = self.node(node_id);
            chars.extend(node.key());
            current = node.parent();
        }

        chars.iter().rev().collect()
    }
}

impl WordIndex for TrieIndex {
    fn definition_of(&self, key: &str) -> Option<Definition> {
        self.definition_for_key(key).cloned()
    }

    fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.words_for_prefix(prefix)
    }
}
