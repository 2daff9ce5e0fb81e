// ============================================================================
// Chroma - 终端颜色工具
// ============================================================================
//
// 文件: src/utils/colors.rs
// 职责: 本地终端输出的颜色处理
// 边界:
//   - ✅ 标题、错误等终端文本着色
//   - ✅ 关闭彩色输出
//   - ❌ 不应包含聊天消息的 ANSI 代码块生成
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use colored::Colorize;

/// 颜色工具函数
pub struct Colors;

impl Colors {
    /// 全局开关彩色输出
    pub fn set_enabled(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// 标题颜色
    pub fn heading(text: &str) -> String {
        text.cyan().bold().to_string()
    }

    /// 错误颜色
    pub fn error(text: &str) -> String {
        text.red().bold().to_string()
    }
}
