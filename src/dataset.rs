//! 启动时加载的词典数据集
//!
//! 数据集是一个 JSON 数组，每条记录包含单词、释义和最多两个例句。
//! 同时接受规范字段名和旧版 `data.json` 的字段名（`Word`、`Meaning`、
//! `Examples/0`、`Examples/1`）。

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DictionaryError, DictionaryResult};

/// 原始数据集记录（未校验）
#[derive(Debug, Clone, Default, Deserialize)]
struct RawRecord {
    #[serde(default, alias = "Word")]
    word: Option<String>,
    #[serde(default, alias = "Meaning")]
    meaning: Option<String>,
    #[serde(default, alias = "Examples/0", alias = "usage1")]
    example1: Option<String>,
    #[serde(default, alias = "Examples/1", alias = "usage2")]
    example2: Option<String>,
}

/// 校验后的数据集记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRecord {
    pub word: String,
    pub meaning: String,
    pub example1: String,
    pub example2: String,
}

impl DatasetRecord {
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        example1: impl Into<String>,
        example2: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            example1: example1.into(),
            example2: example2.into(),
        }
    }
}

impl RawRecord {
    fn validate(self, index: usize) -> DictionaryResult<DatasetRecord> {
        let word = required(self.word, index, "word")?;
        let meaning = required(self.meaning, index, "meaning")?;

        Ok(DatasetRecord {
            word,
            meaning,
            example1: self.example1.unwrap_or_default(),
            example2: self.example2.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, index: usize, field: &'static str) -> DictionaryResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DictionaryError::MissingField { index, field }),
    }
}

/// 从 JSON 文本解析数据集
///
/// 任何一条记录缺少 `word` 或 `meaning` 都会使整个加载失败。
pub fn parse_records(json: &str) -> DictionaryResult<Vec<DatasetRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// 从文件加载数据集
pub fn load_records(path: impl AsRef<Path>) -> DictionaryResult<Vec<DatasetRecord>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .map_err(|e| DictionaryError::Dataset(format!("无法读取 {}: {}", path.display(), e)))?;

    let records = parse_records(&json)?;
    tracing::info!("从 {} 加载了 {} 条词典记录", path.display(), records.len());
    Ok(records)
}
