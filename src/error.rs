//! 词典统一错误处理
//!
//! 提供结构化错误类型。查无此词不是错误，由 `LookupOutcome::NotFound` 表示。

use thiserror::Error;

/// 词典错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// 输入验证错误（空串等）
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 缓存容量必须为正数
    #[error("缓存容量必须大于 0")]
    ZeroCapacity,

    /// 数据集记录缺少必需字段
    #[error("数据集第 {index} 条记录缺少字段 `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// 数据集读取或解析错误
    #[error("数据集错误: {0}")]
    Dataset(String),

    /// 远程存储错误
    #[error("存储错误: {0}")]
    Store(String),

    /// 当前部署模式不支持的操作
    #[error("不支持的操作: {0}")]
    Unsupported(String),
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 调用方传入的参数有误
    Input,
    /// 启动时构建索引或缓存失败
    Construction,
    /// 远程存储不可用
    Store,
    /// 部署模式不支持
    Unsupported,
}

impl DictionaryError {
    /// 创建输入无效错误
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        DictionaryError::InvalidInput(msg.into())
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self {
            DictionaryError::InvalidInput(_) => ErrorCategory::Input,
            DictionaryError::ZeroCapacity => ErrorCategory::Construction,
            DictionaryError::MissingField { .. } => ErrorCategory::Construction,
            DictionaryError::Dataset(_) => ErrorCategory::Construction,
            DictionaryError::Store(_) => ErrorCategory::Store,
            DictionaryError::Unsupported(_) => ErrorCategory::Unsupported,
        }
    }

    /// 启动阶段的错误应当终止进程
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Construction
    }
}

impl From<std::io::Error> for DictionaryError {
    fn from(error: std::io::Error) -> Self {
        DictionaryError::Dataset(format!("IO错误: {}", error))
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(error: serde_json::Error) -> Self {
        DictionaryError::Dataset(format!("JSON解析错误: {}", error))
    }
}

/// 词典操作结果类型
pub type DictionaryResult<T> = Result<T, DictionaryError>;
