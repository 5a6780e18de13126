//! 词典核心数据类型

use serde::{Deserialize, Serialize};

/// 查询失败时返回给调用方的固定消息
pub const NOT_FOUND_MESSAGE: &str = "word not found";

/// 单词释义及例句
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub meaning: String,
    pub usage1: String,
    pub usage2: String,
}

impl Definition {
    pub fn new(
        meaning: impl Into<String>,
        usage1: impl Into<String>,
        usage2: impl Into<String>,
    ) -> Self {
        Self {
            meaning: meaning.into(),
            usage1: usage1.into(),
            usage2: usage2.into(),
        }
    }
}

/// 查询结果
///
/// 序列化为 `{meaning, usage1, usage2}` 或 `{error: "word not found"}`。
/// 查无此词同样会被缓存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Found(Definition),
    NotFound { error: &'static str },
}

impl LookupOutcome {
    pub fn not_found() -> Self {
        LookupOutcome::NotFound {
            error: NOT_FOUND_MESSAGE,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn definition(&self) -> Option<&Definition> {
        match self {
            LookupOutcome::Found(definition) => Some(definition),
            LookupOutcome::NotFound { .. } => None,
        }
    }
}

impl From<Option<Definition>> for LookupOutcome {
    fn from(definition: Option<Definition>) -> Self {
        match definition {
            Some(definition) => LookupOutcome::Found(definition),
            None => LookupOutcome::not_found(),
        }
    }
}
