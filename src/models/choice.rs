// ============================================================================
// Chroma - 格式选项数据模型
// ============================================================================
//
// 文件: src/models/choice.rs
// 职责: 文本样式、前景色、背景色的封闭枚举定义
// 边界:
//   - ✅ 选项枚举及其 ANSI 数值代码
//   - ✅ 选项显示名称和描述
//   - ✅ 从代码 / 名称解析选项
//   - ❌ 不应包含转义序列拼接逻辑
//   - ❌ 不应包含聊天平台组件构建
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 文本样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormatChoice {
    /// 普通
    #[default]
    Normal,
    /// 粗体
    Bold,
    /// 下划线
    Underline,
}

impl FormatChoice {
    /// ANSI 样式代码
    pub fn code(&self) -> u8 {
        match self {
            FormatChoice::Normal => 0,
            FormatChoice::Bold => 1,
            FormatChoice::Underline => 4,
        }
    }

    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            FormatChoice::Normal => "Normal",
            FormatChoice::Bold => "Bold",
            FormatChoice::Underline => "Underline",
        }
    }

    /// 下拉选项中的描述
    pub fn description(&self) -> &'static str {
        match self {
            FormatChoice::Normal => "No special formatting",
            FormatChoice::Bold => "Bold text",
            FormatChoice::Underline => "Underlined text",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|choice| choice.code() == code)
    }

    /// 获取所有样式（按显示顺序）
    pub fn all() -> &'static [FormatChoice] {
        &[FormatChoice::Normal, FormatChoice::Bold, FormatChoice::Underline]
    }
}

/// 文本颜色（前景色）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundColor {
    Blue,
    Cyan,
    #[default]
    Green,
    Grey,
    Pink,
    Red,
    White,
    Yellow,
}

impl ForegroundColor {
    /// ANSI 前景色代码 (30-37)
    pub fn code(&self) -> u8 {
        match self {
            ForegroundColor::Grey => 30,
            ForegroundColor::Red => 31,
            ForegroundColor::Green => 32,
            ForegroundColor::Yellow => 33,
            ForegroundColor::Blue => 34,
            ForegroundColor::Pink => 35,
            ForegroundColor::Cyan => 36,
            ForegroundColor::White => 37,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForegroundColor::Blue => "Blue",
            ForegroundColor::Cyan => "Cyan",
            ForegroundColor::Green => "Green",
            ForegroundColor::Grey => "Grey",
            ForegroundColor::Pink => "Pink",
            ForegroundColor::Red => "Red",
            ForegroundColor::White => "White",
            ForegroundColor::Yellow => "Yellow",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|color| color.code() == code)
    }

    /// 获取所有前景色（按显示顺序，按名称排序而非代码）
    pub fn all() -> &'static [ForegroundColor] {
        &[
            ForegroundColor::Blue,
            ForegroundColor::Cyan,
            ForegroundColor::Green,
            ForegroundColor::Grey,
            ForegroundColor::Pink,
            ForegroundColor::Red,
            ForegroundColor::White,
            ForegroundColor::Yellow,
        ]
    }
}

/// 背景色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundColor {
    #[default]
    DarkBlue,
    DarkGrey,
    Grey,
    Indigo,
    LightGrey,
    Orange,
    Silver,
    White,
}

impl BackgroundColor {
    /// ANSI 背景色代码 (40-47)
    ///
    /// 名称对应的是聊天客户端的实际渲染效果，而不是标准终端配色
    pub fn code(&self) -> u8 {
        match self {
            BackgroundColor::DarkBlue => 40,
            BackgroundColor::Orange => 41,
            BackgroundColor::DarkGrey => 42,
            BackgroundColor::Grey => 43,
            BackgroundColor::LightGrey => 44,
            BackgroundColor::Indigo => 45,
            BackgroundColor::Silver => 46,
            BackgroundColor::White => 47,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundColor::DarkBlue => "Dark Blue",
            BackgroundColor::DarkGrey => "Dark Grey",
            BackgroundColor::Grey => "Grey",
            BackgroundColor::Indigo => "Indigo",
            BackgroundColor::LightGrey => "Light Grey",
            BackgroundColor::Orange => "Orange",
            BackgroundColor::Silver => "Silver",
            BackgroundColor::White => "White",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|color| color.code() == code)
    }

    pub fn all() -> &'static [BackgroundColor] {
        &[
            BackgroundColor::DarkBlue,
            BackgroundColor::DarkGrey,
            BackgroundColor::Grey,
            BackgroundColor::Indigo,
            BackgroundColor::LightGrey,
            BackgroundColor::Orange,
            BackgroundColor::Silver,
            BackgroundColor::White,
        ]
    }
}

/// 选项通用接口，供命令行解析和组件构建共用
pub trait Choice: Copy + Sized + 'static {
    fn code(&self) -> u8;
    fn label(&self) -> &'static str;
    fn all() -> &'static [Self];

    /// 从名称或数值代码解析，名称不区分大小写，空格和 `-`/`_` 等价
    fn parse(input: &str) -> Result<Self, String> {
        let trimmed = input.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::all()
                .iter()
                .copied()
                .find(|choice| choice.code() == code)
                .ok_or_else(|| format!("unknown code: {}", code));
        }

        let wanted = normalize(trimmed);
        Self::all()
            .iter()
            .copied()
            .find(|choice| normalize(choice.label()) == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::all().iter().map(|c| c.label()).collect();
                format!("unknown choice: {} (expected one of: {})", input, names.join(", "))
            })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

macro_rules! impl_choice {
    ($($ty:ty),*) => {$(
        impl Choice for $ty {
            fn code(&self) -> u8 {
                <$ty>::code(self)
            }

            fn label(&self) -> &'static str {
                <$ty>::label(self)
            }

            fn all() -> &'static [Self] {
                <$ty>::all()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} ({})", self.label(), self.code())
            }
        }
    )*};
}

impl_choice!(FormatChoice, ForegroundColor, BackgroundColor);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form_presets() {
        assert_eq!(FormatChoice::default().code(), 0);
        assert_eq!(ForegroundColor::default().code(), 32);
        assert_eq!(BackgroundColor::default().code(), 40);
    }

    #[test]
    fn test_codes_are_distinct_per_enum() {
        let mut fg: Vec<u8> = ForegroundColor::all().iter().map(|c| c.code()).collect();
        fg.sort();
        assert_eq!(fg, (30..=37).collect::<Vec<u8>>());

        let mut bg: Vec<u8> = BackgroundColor::all().iter().map(|c| c.code()).collect();
        bg.sort();
        assert_eq!(bg, (40..=47).collect::<Vec<u8>>());
    }

    #[test]
    fn test_foreground_and_background_ranges_do_not_mix() {
        assert_eq!(ForegroundColor::from_code(40), None);
        assert_eq!(BackgroundColor::from_code(32), None);
        assert_eq!(FormatChoice::from_code(2), None);
        assert_eq!(FormatChoice::from_code(4), Some(FormatChoice::Underline));
    }

    #[test]
    fn test_parse_accepts_labels_and_codes() {
        assert_eq!(<BackgroundColor as Choice>::parse("dark-blue"), Ok(BackgroundColor::DarkBlue));
        assert_eq!(<BackgroundColor as Choice>::parse("Light Grey"), Ok(BackgroundColor::LightGrey));
        assert_eq!(<ForegroundColor as Choice>::parse("31"), Ok(ForegroundColor::Red));
        assert_eq!(<FormatChoice as Choice>::parse("BOLD"), Ok(FormatChoice::Bold));
        assert!(<ForegroundColor as Choice>::parse("41").is_err());
        assert!(<FormatChoice as Choice>::parse("italic").is_err());
    }
}
