// ============================================================================
// Chroma - 格式化请求数据模型
// ============================================================================
//
// 文件: src/models/request.rs
// 职责: 格式化器唯一输入的数据结构定义
// 边界:
//   - ✅ 请求字段定义
//   - ❌ 不应包含格式化逻辑
//
// ============================================================================

use serde::Serialize;

use super::choice::{BackgroundColor, FormatChoice, ForegroundColor};

/// 一次格式化请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattingRequest {
    /// 要着色的文本，原样输出，不做转义
    pub text: String,
    pub style: FormatChoice,
    pub foreground: ForegroundColor,
    pub background: BackgroundColor,
    /// 移动端友好输出：只返回一个代码块
    pub mobile_friendly: bool,
}

impl FormattingRequest {
    pub fn new(
        text: impl Into<String>,
        style: FormatChoice,
        foreground: ForegroundColor,
        background: BackgroundColor,
    ) -> Self {
        Self { text: text.into(), style, foreground, background, mobile_friendly: false }
    }

    pub fn with_mobile_friendly(mut self, mobile_friendly: bool) -> Self {
        self.mobile_friendly = mobile_friendly;
        self
    }

    /// 按 (样式, 前景色, 背景色) 顺序排列的代码
    pub fn codes(&self) -> (u8, u8, u8) {
        (self.style.code(), self.foreground.code(), self.background.code())
    }
}
