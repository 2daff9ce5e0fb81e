// ============================================================================
// Chroma - 交互处理
// ============================================================================
//
// 文件: src/core/interaction.rs
// 职责: 与聊天平台无关的命令和组件事件处理
// 边界:
//   - ✅ 斜杠命令参数解析和格式化
//   - ✅ 上下文菜单会话创建
//   - ✅ 组件事件路由（字段更新 / 提交）
//   - ❌ 不包含平台 API 调用
//   - ❌ 不包含会话超时调度细节
//
// ============================================================================

use crate::core::formatter::format_response;
use crate::core::sessions::SessionStore;
use crate::error::{InteractionError, SessionError};
use crate::models::choice::{BackgroundColor, FormatChoice, ForegroundColor};
use crate::models::request::FormattingRequest;
use crate::models::session::{FieldUpdate, SessionKey};
use crate::ui::form::{ComponentId, FormField};
use crate::utils::constants::{command, MOBILE_YES, SAMPLE_TEXT};

/// 斜杠命令参数的原始取值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Str(String),
    Int(i64),
}

/// 组件事件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentOutcome {
    /// 字段已更新，仅需确认收到
    Acknowledged,
    /// 会话已提交，需移除表单并发送结果
    Committed { content: String },
}

/// 交互处理器
#[derive(Clone, Default)]
pub struct InteractionHandler {
    sessions: SessionStore,
}

impl InteractionHandler {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// 处理 `/chroma` 命令，返回仅调用者可见的回复内容
    pub fn handle_command(
        &self,
        options: &[(String, OptionValue)],
    ) -> Result<String, InteractionError> {
        let request = parse_command_options(options)?;
        Ok(format_response(&request))
    }

    /// 右键菜单：以消息内容创建会话
    pub async fn open_form(&self, message_content: &str) -> SessionKey {
        let text = if message_content.is_empty() { SAMPLE_TEXT } else { message_content };
        self.sessions.open(text).await
    }

    /// 处理表单组件事件
    pub async fn handle_component(
        &self,
        custom_id: &str,
        values: &[String],
    ) -> Result<ComponentOutcome, InteractionError> {
        let id = ComponentId::parse(custom_id)
            .ok_or_else(|| InteractionError::MalformedComponent(custom_id.to_string()))?;

        if id.field == FormField::Submit {
            let request = self.sessions.commit(id.session).await?;
            return Ok(ComponentOutcome::Committed { content: format_response(&request) });
        }

        match field_update(id.field, values)? {
            Some(update) => self.sessions.update(id.session, update).await?,
            None => self.sessions.check(id.session).await?,
        }
        Ok(ComponentOutcome::Acknowledged)
    }
}

/// 下拉框取值 → 字段更新；移动端字段未选择时返回 None，保留原值
fn field_update(field: FormField, values: &[String]) -> Result<Option<FieldUpdate>, SessionError> {
    let value = values.first().map(String::as_str);
    let invalid = |value: Option<&str>| SessionError::InvalidValue {
        field: field.as_str(),
        value: value.unwrap_or_default().to_string(),
    };

    let update = match field {
        FormField::Mobile => match value {
            None => return Ok(None),
            Some(v) if v == MOBILE_YES => FieldUpdate::MobileFriendly(true),
            Some(_) => return Err(invalid(value)),
        },
        FormField::Format => value
            .and_then(parse_code)
            .and_then(FormatChoice::from_code)
            .map(FieldUpdate::Style)
            .ok_or_else(|| invalid(value))?,
        FormField::Background => value
            .and_then(parse_code)
            .and_then(BackgroundColor::from_code)
            .map(FieldUpdate::Background)
            .ok_or_else(|| invalid(value))?,
        FormField::Text => value
            .and_then(parse_code)
            .and_then(ForegroundColor::from_code)
            .map(FieldUpdate::Foreground)
            .ok_or_else(|| invalid(value))?,
        FormField::Submit => return Ok(None),
    };
    Ok(Some(update))
}

fn parse_code(value: &str) -> Option<u8> {
    value.parse().ok()
}

/// 将命令参数解析为格式化请求
pub fn parse_command_options(
    options: &[(String, OptionValue)],
) -> Result<FormattingRequest, InteractionError> {
    let find = |name: &str| options.iter().find(|(n, _)| n == name).map(|(_, v)| v);

    let text = match find(command::option::MESSAGE) {
        Some(OptionValue::Str(text)) => text.clone(),
        Some(other) => return Err(invalid_option(command::option::MESSAGE, other)),
        None => return Err(InteractionError::MissingOption(command::option::MESSAGE)),
    };

    let style = int_option(find(command::option::FORMAT), command::option::FORMAT, FormatChoice::from_code)?;
    let background = int_option(
        find(command::option::BACKGROUND_COLOR),
        command::option::BACKGROUND_COLOR,
        BackgroundColor::from_code,
    )?;
    let foreground = int_option(
        find(command::option::TEXT_COLOR),
        command::option::TEXT_COLOR,
        ForegroundColor::from_code,
    )?;

    let mobile_friendly = match find(command::option::MOBILE_FRIENDLY) {
        None => false,
        Some(OptionValue::Str(v)) => v == MOBILE_YES,
        Some(other) => return Err(invalid_option(command::option::MOBILE_FRIENDLY, other)),
    };

    Ok(FormattingRequest::new(text, style, foreground, background).with_mobile_friendly(mobile_friendly))
}

fn int_option<T>(
    value: Option<&OptionValue>,
    name: &'static str,
    from_code: fn(u8) -> Option<T>,
) -> Result<T, InteractionError> {
    match value {
        None => Err(InteractionError::MissingOption(name)),
        Some(OptionValue::Int(raw)) => u8::try_from(*raw)
            .ok()
            .and_then(from_code)
            .ok_or_else(|| InteractionError::InvalidOption { name, value: raw.to_string() }),
        Some(other) => Err(invalid_option(name, other)),
    }
}

fn invalid_option(name: &'static str, value: &OptionValue) -> InteractionError {
    let value = match value {
        OptionValue::Str(s) => s.clone(),
        OptionValue::Int(i) => i.to_string(),
    };
    InteractionError::InvalidOption { name, value }
}
