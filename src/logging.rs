//! 日志初始化

use tracing::Level;

/// 将日志级别字符串转换为 `tracing::Level`，无法识别时使用 INFO
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// 安装全局 fmt 订阅器，重复调用不会报错
pub fn init_tracing(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("日志订阅器已初始化，跳过");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("bogus"), Level::INFO);
    }

    #[test]
    fn test_init_twice() {
        init_tracing("info");
        init_tracing("debug");
    }
}
