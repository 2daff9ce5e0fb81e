// ============================================================================
// Chroma - CLI Preview 命令
// ============================================================================
//
// 文件: src/cli/preview.rs
// 职责: 在本地终端运行格式化器，无需连接聊天平台
// 边界:
//   - ✅ 命令行参数定义和选项名称解析
//   - ✅ 文本 / JSON 两种输出
//   - ❌ 不应包含格式化实现
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::core::formatter::{colorize, format_response};
use crate::models::choice::{BackgroundColor, Choice, FormatChoice, ForegroundColor};
use crate::models::request::FormattingRequest;
use crate::t;
use crate::utils::colors::Colors;

/// 预览命令参数
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// 要着色的文本
    #[arg(short, long)]
    pub message: String,

    /// 文本样式（名称或代码，如 bold / 1）
    #[arg(short, long, default_value = "normal", value_parser = parse_choice::<FormatChoice>)]
    pub format: FormatChoice,

    /// 文本颜色（名称或代码，如 red / 31）
    #[arg(short, long, default_value = "green", value_parser = parse_choice::<ForegroundColor>)]
    pub text_color: ForegroundColor,

    /// 背景色（名称或代码，如 dark-blue / 40）
    #[arg(short, long, default_value = "dark-blue", value_parser = parse_choice::<BackgroundColor>)]
    pub background_color: BackgroundColor,

    /// 移动端友好输出（只输出一个代码块）
    #[arg(long)]
    pub mobile: bool,

    /// 以 JSON 格式输出
    #[arg(long)]
    pub json: bool,
}

fn parse_choice<C: Choice>(input: &str) -> Result<C, String> {
    C::parse(input)
}

impl PreviewArgs {
    pub fn to_request(&self) -> FormattingRequest {
        FormattingRequest::new(
            self.message.clone(),
            self.format,
            self.text_color,
            self.background_color,
        )
        .with_mobile_friendly(self.mobile)
    }
}

/// 处理预览命令
pub fn handle_preview(args: PreviewArgs) -> Result<()> {
    let request = args.to_request();
    let response = format_response(&request);

    if args.json {
        let output = json!({ "request": request, "response": response });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", Colors::heading(&t!("preview.rendered")));
    println!("{}", colorize(&request));
    println!();
    println!("{}", Colors::heading(&t!("preview.message")));
    // 转义字符不可见，以 \u001b 形式展示
    println!("{}", response.replace('\u{1b}', "\\u001b"));
    Ok(())
}
