//! 前缀树节点

use std::collections::BTreeMap;

use crate::types::Definition;

/// 节点在索引内部数组中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// 前缀树节点
///
/// `children` 是拥有关系；`parent` 只是回指，用于从终止节点重建完整单词，
/// 遍历时从不经由它。
#[derive(Debug, Clone)]
pub struct TrieNode {
    key: Option<char>,
    parent: Option<NodeId>,
    children: BTreeMap<char, NodeId>,
    definition: Option<Definition>,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self {
            key: None,
            parent: None,
            children: BTreeMap::new(),
            definition: None,
        }
    }

    pub(crate) fn child_of(parent: NodeId, key: char) -> Self {
        Self {
            key: Some(key),
            parent: Some(parent),
            children: BTreeMap::new(),
            definition: None,
        }
    }

    /// 节点代表的字符，根节点为 `None`
    pub fn key(&self) -> Option<char> {
        self.key
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// 是否有单词恰好在此结束
    pub fn is_terminal(&self) -> bool {
        self.definition.is_some()
    }

    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    pub(crate) fn set_definition(&mut self, definition: Definition) -> Option<Definition> {
        self.definition.replace(definition)
    }

    pub(crate) fn child(&self, key: char) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    pub(crate) fn add_child(&mut self, key: char, id: NodeId) {
        self.children.insert(key, id);
    }

    /// 按字符升序遍历子节点
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }
}
