// ============================================================================
// Chroma - 命令定义
// ============================================================================
//
// 文件: src/ui/commands.rs
// 职责: 斜杠命令和上下文菜单的声明式定义
// 边界:
//   - ✅ 命令参数及枚举选项声明
//   - ❌ 不应包含命令同步逻辑
//   - ❌ 不应包含命令处理逻辑
//
// ============================================================================

use serenity::all::{CommandOptionType, CommandType, CreateCommand, CreateCommandOption};

use crate::models::choice::{BackgroundColor, Choice, FormatChoice, ForegroundColor};
use crate::utils::constants::{command, MOBILE_YES};

/// 需要同步到平台的全部命令
pub fn all_commands() -> Vec<CreateCommand> {
    vec![chroma_command(), colorize_context_menu()]
}

/// `/chroma` 斜杠命令
pub fn chroma_command() -> CreateCommand {
    CreateCommand::new(command::NAME)
        .description(command::DESCRIPTION)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                command::option::MESSAGE,
                command::describe::MESSAGE,
            )
            .required(true),
        )
        .add_option(choice_option::<FormatChoice>(
            command::option::FORMAT,
            command::describe::FORMAT,
        ))
        .add_option(choice_option::<BackgroundColor>(
            command::option::BACKGROUND_COLOR,
            command::describe::BACKGROUND_COLOR,
        ))
        .add_option(choice_option::<ForegroundColor>(
            command::option::TEXT_COLOR,
            command::describe::TEXT_COLOR,
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                command::option::MOBILE_FRIENDLY,
                command::describe::MOBILE_FRIENDLY,
            )
            .add_string_choice("Yes", MOBILE_YES),
        )
}

/// 消息右键菜单 "Colorize Text"
pub fn colorize_context_menu() -> CreateCommand {
    CreateCommand::new(command::CONTEXT_MENU).kind(CommandType::Message)
}

fn choice_option<C: Choice>(name: &str, description: &str) -> CreateCommandOption {
    C::all().iter().fold(
        CreateCommandOption::new(CommandOptionType::Integer, name, description).required(true),
        |option, choice| option.add_int_choice(choice.label(), i32::from(choice.code())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma_command_declares_all_options() {
        let json = serde_json::to_string(&chroma_command()).unwrap();
        for name in ["message", "format", "background_color", "text_color", "mobile_friendly"] {
            assert!(json.contains(&format!("\"{}\"", name)), "missing option {name}");
        }
        assert!(json.contains("Dark Blue"));
        assert!(json.contains("Yellow"));
        assert!(json.contains("Underline"));
    }

    #[test]
    fn test_two_commands_are_registered() {
        assert_eq!(all_commands().len(), 2);
        let json = serde_json::to_string(&colorize_context_menu()).unwrap();
        assert!(json.contains("Colorize Text"));
    }
}
