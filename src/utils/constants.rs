// ============================================================================
// Chroma - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 命令名称、组件文案和默认值常量
// 边界:
//   - ✅ 命令及参数名称定义
//   - ✅ 表单文案定义
//   - ✅ 默认配置常量
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

/// 默认配置文件名
pub const CONFIG_FILE: &str = "chroma.toml";

/// 默认令牌环境变量名
pub const DEFAULT_TOKEN_ENV: &str = "DISCORD_TOKEN";

/// 组件 ID 前缀
pub const COMPONENT_PREFIX: &str = "chroma";

/// "移动端友好" 选项的取值
pub const MOBILE_YES: &str = "yes";

/// 上下文菜单作用的消息没有文本时使用的占位文本
pub const SAMPLE_TEXT: &str = "Sample text";

/// 斜杠命令
pub mod command {
    pub const NAME: &str = "chroma";
    pub const DESCRIPTION: &str = "Create a colorful ANSI code block";

    /// 上下文菜单名称
    pub const CONTEXT_MENU: &str = "Colorize Text";

    pub mod option {
        pub const MESSAGE: &str = "message";
        pub const FORMAT: &str = "format";
        pub const BACKGROUND_COLOR: &str = "background_color";
        pub const TEXT_COLOR: &str = "text_color";
        pub const MOBILE_FRIENDLY: &str = "mobile_friendly";
    }

    pub mod describe {
        pub const MESSAGE: &str = "The message to colorize";
        pub const FORMAT: &str = "Text formatting";
        pub const BACKGROUND_COLOR: &str = "The background color";
        pub const TEXT_COLOR: &str = "The color of the text";
        pub const MOBILE_FRIENDLY: &str = "Mobile-friendly copy-paste output";
    }
}

/// 选择表单文案
pub mod form {
    pub const PROMPT: &str = "Select below your format, background color, text color \
(and optionally, a mobile-friendly output), then click **Submit**.";
    pub const FORMAT_PLACEHOLDER: &str = "Pick a format...";
    pub const BACKGROUND_PLACEHOLDER: &str = "Pick a background color...";
    pub const TEXT_PLACEHOLDER: &str = "Pick a text color...";
    pub const MOBILE_PLACEHOLDER: &str = "Mobile-friendly output? (Optional)";
    pub const SUBMIT_LABEL: &str = "Submit";
}
