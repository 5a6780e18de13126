//! 查询词规范化
//!
//! 数据集写入索引和每次查询访问缓存或索引之前都经过同一个规范化函数：
//! 去掉首尾空白，首字符大写，其余字符小写。

use crate::error::{DictionaryError, DictionaryResult};

/// 将原始输入转换为规范形式
///
/// 空串（或仅含空白）返回 `InvalidInput`。首字符大写后展开为多个字符时
/// （如 `ß` → `SS`），只保留展开的第一个字符为大写，其余并入小写部分，
/// 因此结果再次规范化保持不变。
pub fn normalize(raw: &str) -> DictionaryResult<String> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();

    let first = chars
        .next()
        .ok_or_else(|| DictionaryError::invalid_input("查询词不能为空"))?;

    let mut upper = first.to_uppercase();
    let mut normalized = String::with_capacity(trimmed.len());
    normalized.extend(upper.next());
    for c in upper.chain(chars) {
        normalized.extend(c.to_lowercase());
    }

    Ok(normalized)
}
