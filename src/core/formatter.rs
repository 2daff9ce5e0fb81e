// ============================================================================
// Chroma - ANSI 格式化器
// ============================================================================
//
// 文件: src/core/formatter.rs
// 职责: 将格式化请求转换为聊天客户端可渲染的 ANSI 代码块
// 边界:
//   - ✅ 转义序列拼接
//   - ✅ 输出模式选择（移动端 / 预览 + 复制）
//   - ❌ 不应包含输入校验（输入来自封闭枚举）
//   - ❌ 不应转义用户文本
//
// ============================================================================

use crate::models::request::FormattingRequest;

/// 转义字符
pub const ESC: &str = "\u{1b}";

/// 重置序列
pub const RESET: &str = "\u{1b}[0m";

const PREVIEW_INTRO: &str = "Here's your colorized message:";
const RAW_INTRO: &str = "Raw text for copy-pasting:";

/// 转义前缀，代码顺序固定为 样式;前景色;背景色
pub fn escape_prefix(request: &FormattingRequest) -> String {
    let (style, foreground, background) = request.codes();
    format!("{}[{};{};{}m", ESC, style, foreground, background)
}

/// 带样式的文本：前缀 + 原文 + 重置
pub fn colorize(request: &FormattingRequest) -> String {
    format!("{}{}{}", escape_prefix(request), request.text, RESET)
}

/// 包裹在 ansi 代码块中的着色文本
pub fn ansi_block(request: &FormattingRequest) -> String {
    format!("```ansi\n{}\n```", colorize(request))
}

/// 复制块：围栏反引号前加反斜杠，客户端按原文显示而不渲染
pub fn raw_block(request: &FormattingRequest) -> String {
    format!("\\`\\`\\`ansi\n{}\n\\`\\`\\`", colorize(request))
}

/// 生成回复内容
///
/// 移动端模式只返回代码块；否则返回预览块和复制块，两者包含相同的转义文本。
pub fn format_response(request: &FormattingRequest) -> String {
    if request.mobile_friendly {
        return ansi_block(request);
    }

    format!(
        "{}\n{}\n{}\n{}",
        PREVIEW_INTRO,
        ansi_block(request),
        RAW_INTRO,
        raw_block(request)
    )
}
