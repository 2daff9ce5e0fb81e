// ============================================================================
// Chroma - 选择表单组件
// ============================================================================
//
// 文件: src/ui/form.rs
// 职责: 交互式选择表单的布局和组件 ID 编解码
// 边界:
//   - ✅ 四个下拉框和提交按钮的构建
//   - ✅ 组件 ID <-> (会话键, 字段) 映射
//   - ❌ 不应包含会话状态管理
//   - ❌ 不应发送任何消息
//
// ============================================================================

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};

use crate::models::choice::{BackgroundColor, FormatChoice, ForegroundColor};
use crate::models::session::SessionKey;
use crate::utils::constants::{form, COMPONENT_PREFIX, MOBILE_YES};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Format,
    Background,
    Text,
    Mobile,
    Submit,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Format => "format",
            FormField::Background => "background",
            FormField::Text => "text",
            FormField::Mobile => "mobile",
            FormField::Submit => "submit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "format" => Some(FormField::Format),
            "background" => Some(FormField::Background),
            "text" => Some(FormField::Text),
            "mobile" => Some(FormField::Mobile),
            "submit" => Some(FormField::Submit),
            _ => None,
        }
    }
}

/// 组件 ID：`chroma:<会话键>:<字段>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentId {
    pub session: SessionKey,
    pub field: FormField,
}

impl ComponentId {
    pub fn new(session: SessionKey, field: FormField) -> Self {
        Self { session, field }
    }

    pub fn encode(&self) -> String {
        format!("{}:{}:{}", COMPONENT_PREFIX, self.session, self.field.as_str())
    }

    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.splitn(3, ':');
        if parts.next()? != COMPONENT_PREFIX {
            return None;
        }
        let session = SessionKey::parse(parts.next()?)?;
        let field = FormField::parse(parts.next()?)?;
        Some(Self { session, field })
    }
}

/// 构建会话对应的完整表单（每行一个组件）
pub fn build_form(session: SessionKey) -> Vec<CreateActionRow> {
    vec![
        CreateActionRow::SelectMenu(format_select(session)),
        CreateActionRow::SelectMenu(background_select(session)),
        CreateActionRow::SelectMenu(text_select(session)),
        CreateActionRow::SelectMenu(mobile_select(session)),
        CreateActionRow::Buttons(vec![submit_button(session)]),
    ]
}

fn single_select(
    session: SessionKey,
    field: FormField,
    placeholder: &str,
    options: Vec<CreateSelectMenuOption>,
) -> CreateSelectMenu {
    CreateSelectMenu::new(
        ComponentId::new(session, field).encode(),
        CreateSelectMenuKind::String { options },
    )
    .placeholder(placeholder)
    .min_values(1)
    .max_values(1)
}

fn format_select(session: SessionKey) -> CreateSelectMenu {
    let options = FormatChoice::all()
        .iter()
        .map(|choice| {
            CreateSelectMenuOption::new(choice.label(), choice.code().to_string())
                .description(choice.description())
        })
        .collect();
    single_select(session, FormField::Format, form::FORMAT_PLACEHOLDER, options)
}

fn background_select(session: SessionKey) -> CreateSelectMenu {
    let options = BackgroundColor::all()
        .iter()
        .map(|color| CreateSelectMenuOption::new(color.label(), color.code().to_string()))
        .collect();
    single_select(session, FormField::Background, form::BACKGROUND_PLACEHOLDER, options)
}

fn text_select(session: SessionKey) -> CreateSelectMenu {
    let options = ForegroundColor::all()
        .iter()
        .map(|color| CreateSelectMenuOption::new(color.label(), color.code().to_string()))
        .collect();
    single_select(session, FormField::Text, form::TEXT_PLACEHOLDER, options)
}

/// 可选字段，允许不选
fn mobile_select(session: SessionKey) -> CreateSelectMenu {
    CreateSelectMenu::new(
        ComponentId::new(session, FormField::Mobile).encode(),
        CreateSelectMenuKind::String {
            options: vec![CreateSelectMenuOption::new("Yes", MOBILE_YES)],
        },
    )
    .placeholder(form::MOBILE_PLACEHOLDER)
    .min_values(0)
    .max_values(1)
}

fn submit_button(session: SessionKey) -> CreateButton {
    CreateButton::new(ComponentId::new(session, FormField::Submit).encode())
        .label(form::SUBMIT_LABEL)
        .style(ButtonStyle::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_encoding() {
        let id = ComponentId::new(SessionKey::new(42), FormField::Background);
        assert_eq!(id.encode(), "chroma:000000000000002a:background");
        assert_eq!(ComponentId::parse(&id.encode()), Some(id));
    }

    #[test]
    fn test_component_id_rejects_foreign_ids() {
        assert_eq!(ComponentId::parse("other:000000000000002a:format"), None);
        assert_eq!(ComponentId::parse("chroma:2a:format"), None);
        assert_eq!(ComponentId::parse("chroma:000000000000002a:colour"), None);
        assert_eq!(ComponentId::parse("chroma"), None);
        assert_eq!(ComponentId::parse("chroma:+00000000000002a:format"), None);
        assert_eq!(ComponentId::parse("chroma:000000000000002A:format"), None);
    }

    #[test]
    fn test_form_field_names_round_trip() {
        for field in [
            FormField::Format,
            FormField::Background,
            FormField::Text,
            FormField::Mobile,
            FormField::Submit,
        ] {
            assert_eq!(FormField::parse(field.as_str()), Some(field));
        }
        assert_eq!(FormField::parse("Format"), None);
    }

    #[test]
    fn test_form_has_five_rows_bound_to_session() {
        let key = SessionKey::new(7);
        let rows = build_form(key);
        assert_eq!(rows.len(), 5);

        let json = serde_json::to_string(&rows).unwrap();
        for field in ["format", "background", "text", "mobile", "submit"] {
            assert!(json.contains(&format!("chroma:{}:{}", key, field)), "missing {field}");
        }
        assert!(json.contains("Pick a format..."));
        assert!(json.contains("Dark Blue"));
        assert!(json.contains("Underlined text"));
    }
}
