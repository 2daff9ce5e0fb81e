// ============================================================================
// Chroma - 日志工具
// ============================================================================
//
// 文件: src/utils/logger.rs
// 职责: 日志初始化配置
// 边界:
//   - ✅ 日志级别管理
//   - ✅ 日志初始化配置
//   - ✅ 控制台颜色控制
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件日志写入
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;

/// 默认过滤规则，RUST_LOG 优先
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "info,chroma=debug"
    } else {
        "info,serenity=warn"
    }
}

/// 初始化 tracing 订阅器，重复调用无副作用
pub fn init(verbose: bool, colored: bool) {
    Colors::set_enabled(colored);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(colored)
        .with_target(verbose)
        .try_init();
}
