// ============================================================================
// Chroma - 选择会话数据模型
// ============================================================================
//
// 文件: src/models/session.rs
// 职责: 交互式选择表单背后的会话状态
// 边界:
//   - ✅ 会话字段及默认值
//   - ✅ 会话状态机 (Open → Committed / Expired)
//   - ✅ 单字段更新和提交
//   - ❌ 不应包含超时调度逻辑
//   - ❌ 不应包含聊天平台调用
//
// ============================================================================

use std::fmt;

use crate::error::SessionError;
use crate::models::choice::{BackgroundColor, FormatChoice, ForegroundColor};
use crate::models::request::FormattingRequest;

/// 会话键，随机 64 位，组件 ID 中以 16 位十六进制表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(u64);

impl SessionKey {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn random() -> Self {
        Self(rand::random())
    }

    /// 只接受 16 位小写十六进制，与 `Display` 输出一致
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 16 || !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return None;
        }
        u64::from_str_radix(s, 16).ok().map(Self)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// 等待字段更新或提交
    Open,
    /// 已提交（终态）
    Committed,
    /// 空闲超时（终态）
    Expired,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Open => write!(f, "open"),
            SessionState::Committed => write!(f, "committed"),
            SessionState::Expired => write!(f, "expired"),
        }
    }
}

/// 单个字段的更新事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Style(FormatChoice),
    Foreground(ForegroundColor),
    Background(BackgroundColor),
    MobileFriendly(bool),
}

/// 一个交互式表单实例的可变状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSession {
    text: String,
    style: FormatChoice,
    foreground: ForegroundColor,
    background: BackgroundColor,
    /// None 表示用户从未选择
    mobile_friendly: Option<bool>,
    state: SessionState,
}

impl SelectionSession {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FormatChoice::default(),
            foreground: ForegroundColor::default(),
            background: BackgroundColor::default(),
            mobile_friendly: None,
            state: SessionState::Open,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn style(&self) -> FormatChoice {
        self.style
    }

    pub fn foreground(&self) -> ForegroundColor {
        self.foreground
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn mobile_friendly(&self) -> Option<bool> {
        self.mobile_friendly
    }

    /// 覆盖单个字段，其他字段不受影响
    pub fn apply(&mut self, update: FieldUpdate) -> Result<(), SessionError> {
        self.ensure_open()?;
        match update {
            FieldUpdate::Style(style) => self.style = style,
            FieldUpdate::Foreground(foreground) => self.foreground = foreground,
            FieldUpdate::Background(background) => self.background = background,
            FieldUpdate::MobileFriendly(flag) => self.mobile_friendly = Some(flag),
        }
        Ok(())
    }

    /// 提交会话并生成格式化请求，之后会话不再接受任何操作
    pub fn commit(&mut self) -> Result<FormattingRequest, SessionError> {
        self.ensure_open()?;
        self.state = SessionState::Committed;
        Ok(self.snapshot())
    }

    pub fn expire(&mut self) {
        if self.state == SessionState::Open {
            self.state = SessionState::Expired;
        }
    }

    /// 当前字段值对应的请求，未设置的移动端标志视为 false
    pub fn snapshot(&self) -> FormattingRequest {
        FormattingRequest::new(self.text.clone(), self.style, self.foreground, self.background)
            .with_mobile_friendly(self.mobile_friendly.unwrap_or(false))
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Open => Ok(()),
            state => Err(SessionError::Closed(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_uses_defaults() {
        let session = SelectionSession::new("sample");
        let request = session.snapshot();
        assert_eq!(request.text, "sample");
        assert_eq!(request.codes(), (0, 32, 40));
        assert!(!request.mobile_friendly);
        assert_eq!(session.mobile_friendly(), None);
        assert_eq!(session.state(), SessionState::Open);
    }

    #[test]
    fn test_updates_commute_across_fields() {
        let mut a = SelectionSession::new("x");
        a.apply(FieldUpdate::Style(FormatChoice::Bold)).unwrap();
        a.apply(FieldUpdate::Background(BackgroundColor::Grey)).unwrap();
        a.apply(FieldUpdate::Foreground(ForegroundColor::Blue)).unwrap();

        let mut b = SelectionSession::new("x");
        b.apply(FieldUpdate::Foreground(ForegroundColor::Blue)).unwrap();
        b.apply(FieldUpdate::Background(BackgroundColor::Grey)).unwrap();
        b.apply(FieldUpdate::Style(FormatChoice::Bold)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.snapshot().codes(), (1, 34, 43));
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let mut session = SelectionSession::new("x");
        session.apply(FieldUpdate::Foreground(ForegroundColor::Red)).unwrap();
        session.apply(FieldUpdate::Foreground(ForegroundColor::Yellow)).unwrap();
        session.apply(FieldUpdate::Foreground(ForegroundColor::Yellow)).unwrap();
        assert_eq!(session.foreground(), ForegroundColor::Yellow);
        assert_eq!(session.style(), FormatChoice::Normal);
    }

    #[test]
    fn test_commit_is_terminal() {
        let mut session = SelectionSession::new("x");
        session.apply(FieldUpdate::MobileFriendly(true)).unwrap();
        let request = session.commit().unwrap();
        assert!(request.mobile_friendly);
        assert_eq!(session.state(), SessionState::Committed);

        assert_eq!(session.commit(), Err(SessionError::Closed(SessionState::Committed)));
        assert_eq!(
            session.apply(FieldUpdate::Style(FormatChoice::Bold)),
            Err(SessionError::Closed(SessionState::Committed))
        );
    }

    #[test]
    fn test_expired_session_rejects_everything() {
        let mut session = SelectionSession::new("x");
        session.expire();
        assert_eq!(session.state(), SessionState::Expired);
        assert!(session.commit().is_err());
        assert!(session.apply(FieldUpdate::MobileFriendly(true)).is_err());
    }

    #[test]
    fn test_session_key_round_trips_through_hex() {
        let key = SessionKey::new(0xdead_beef);
        assert_eq!(key.to_string(), "00000000deadbeef");
        assert_eq!(SessionKey::parse("00000000deadbeef"), Some(key));
        assert_eq!(SessionKey::parse("beef"), None);
        assert_eq!(SessionKey::parse("zzzzzzzzzzzzzzzz"), None);
    }

    #[test]
    fn test_session_key_rejects_non_canonical_hex() {
        assert_eq!(SessionKey::parse("+00000000000002a"), None);
        assert_eq!(SessionKey::parse("00000000DEADBEEF"), None);
        assert_eq!(SessionKey::parse("-00000000000002a"), None);
        assert_eq!(SessionKey::parse("000000000000002a"), Some(SessionKey::new(42)));
    }
}
