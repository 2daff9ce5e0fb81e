// ============================================================================
// Chroma - 选择会话存储
// ============================================================================
//
// 文件: src/core/sessions.rs
// 职责: 交互式选择会话的生命周期管理
// 边界:
//   - ✅ 会话创建、按键查找、字段更新、提交
//   - ✅ 空闲超时调度和取消
//   - ✅ 终态会话的拒绝处理
//   - ❌ 不包含格式化逻辑
//   - ❌ 不包含聊天平台调用
//
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::SessionError;
use crate::models::request::FormattingRequest;
use crate::models::session::{FieldUpdate, SelectionSession, SessionKey};
use crate::tf;

/// 默认空闲超时（秒）
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 120;

/// 会话存储配置
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// 空闲超时时长
    pub idle_timeout: Duration,
    /// 字段更新时是否重新计时
    pub reset_on_activity: bool,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
            reset_on_activity: false,
        }
    }
}

struct SessionEntry {
    session: SelectionSession,
    deadline: Instant,
    /// 提交时取消过期任务
    cancel: CancellationToken,
}

/// 会话存储，克隆后共享同一份状态
#[derive(Clone)]
pub struct SessionStore {
    config: SessionStoreConfig,
    sessions: Arc<RwLock<HashMap<SessionKey, SessionEntry>>>,
}

impl SessionStore {
    pub fn new(config: SessionStoreConfig) -> Self {
        Self { config, sessions: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// 为给定文本创建会话并启动过期任务
    pub async fn open(&self, text: impl Into<String>) -> SessionKey {
        let cancel = CancellationToken::new();
        let key = {
            let mut sessions = self.sessions.write().await;
            let key = loop {
                let candidate = SessionKey::random();
                if !sessions.contains_key(&candidate) {
                    break candidate;
                }
            };
            sessions.insert(
                key,
                SessionEntry {
                    session: SelectionSession::new(text),
                    deadline: Instant::now() + self.config.idle_timeout,
                    cancel: cancel.clone(),
                },
            );
            key
        };

        debug!("{}", tf!("session.opened", key, self.config.idle_timeout.as_secs()));
        self.spawn_expiry(key, cancel);
        key
    }

    /// 覆盖会话中的单个字段
    pub async fn update(&self, key: SessionKey, update: FieldUpdate) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        Self::ensure_live(&mut sessions, key)?;

        let entry = sessions.get_mut(&key).ok_or(SessionError::NotFound(key))?;
        entry.session.apply(update)?;
        if self.config.reset_on_activity {
            entry.deadline = Instant::now() + self.config.idle_timeout;
        }

        debug!("{}", tf!("session.updated", key, format!("{:?}", update)));
        Ok(())
    }

    /// 提交会话：读取当前字段、移除会话、取消过期任务
    pub async fn commit(&self, key: SessionKey) -> Result<FormattingRequest, SessionError> {
        let mut sessions = self.sessions.write().await;
        Self::ensure_live(&mut sessions, key)?;

        let mut entry = sessions.remove(&key).ok_or(SessionError::NotFound(key))?;
        entry.cancel.cancel();
        let request = entry.session.commit()?;

        debug!("{}", tf!("session.committed", key));
        Ok(request)
    }

    /// 仅校验会话仍可接受操作
    pub async fn check(&self, key: SessionKey) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        Self::ensure_live(&mut sessions, key)
    }

    /// 会话当前状态的快照
    pub async fn get(&self, key: SessionKey) -> Option<SelectionSession> {
        self.sessions.read().await.get(&key).map(|entry| entry.session.clone())
    }

    /// 存活会话数量
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// 已过截止时间但过期任务尚未运行的会话同样视为过期
    fn ensure_live(
        sessions: &mut HashMap<SessionKey, SessionEntry>,
        key: SessionKey,
    ) -> Result<(), SessionError> {
        let deadline = sessions
            .get(&key)
            .map(|entry| entry.deadline)
            .ok_or(SessionError::NotFound(key))?;

        if deadline <= Instant::now() {
            if let Some(mut entry) = sessions.remove(&key) {
                entry.cancel.cancel();
                entry.session.expire();
            }
            return Err(SessionError::Expired(key));
        }
        Ok(())
    }

    fn spawn_expiry(&self, key: SessionKey, cancel: CancellationToken) {
        let store = self.clone();
        tokio::spawn(async move {
            loop {
                let Some(deadline) = store.deadline_of(key).await else {
                    return;
                };

                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = sleep_until(deadline) => {
                        if store.expire_if_due(key).await {
                            return;
                        }
                    }
                }
            }
        });
    }

    async fn deadline_of(&self, key: SessionKey) -> Option<Instant> {
        self.sessions.read().await.get(&key).map(|entry| entry.deadline)
    }

    /// 返回 true 表示会话已不在存储中，过期任务可以结束
    async fn expire_if_due(&self, key: SessionKey) -> bool {
        let mut sessions = self.sessions.write().await;
        let due = match sessions.get(&key) {
            Some(entry) => entry.deadline <= Instant::now(),
            None => return true,
        };
        if !due {
            return false;
        }

        if let Some(mut entry) = sessions.remove(&key) {
            entry.session.expire();
            debug!("{}", tf!("session.expired", key));
        }
        true
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionStoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::choice::{BackgroundColor, FormatChoice, ForegroundColor};

    fn store_with(timeout_secs: u64, reset_on_activity: bool) -> SessionStore {
        SessionStore::new(SessionStoreConfig {
            idle_timeout: Duration::from_secs(timeout_secs),
            reset_on_activity,
        })
    }

    fn is_rejection(err: &SessionError) -> bool {
        matches!(err, SessionError::Expired(_) | SessionError::NotFound(_))
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_untouched_session_uses_defaults() {
        let store = SessionStore::default();
        let key = store.open("sample").await;

        let request = store.commit(key).await.unwrap();
        assert_eq!(request.text, "sample");
        assert_eq!(request.codes(), (0, 32, 40));
        assert!(!request.mobile_friendly);
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_style_update_then_commit() {
        let store = SessionStore::default();
        let key = store.open("sample").await;

        store.update(key, FieldUpdate::Style(FormatChoice::Underline)).await.unwrap();
        let request = store.commit(key).await.unwrap();
        assert_eq!(request.codes(), (4, 32, 40));
        assert!(!request.mobile_friendly);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_order_does_not_matter() {
        let store = SessionStore::default();
        let a = store.open("x").await;
        let b = store.open("x").await;
        assert_ne!(a, b);

        store.update(a, FieldUpdate::Style(FormatChoice::Bold)).await.unwrap();
        store.update(a, FieldUpdate::Background(BackgroundColor::Grey)).await.unwrap();
        store.update(a, FieldUpdate::Foreground(ForegroundColor::Blue)).await.unwrap();

        store.update(b, FieldUpdate::Foreground(ForegroundColor::Blue)).await.unwrap();
        store.update(b, FieldUpdate::Style(FormatChoice::Bold)).await.unwrap();
        store.update(b, FieldUpdate::Background(BackgroundColor::Grey)).await.unwrap();

        assert_eq!(store.get(a).await, store.get(b).await);
        assert_eq!(store.commit(a).await.unwrap().codes(), (1, 34, 43));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_commit_is_rejected() {
        let store = SessionStore::default();
        let key = store.open("x").await;
        store.commit(key).await.unwrap();

        assert_eq!(store.commit(key).await, Err(SessionError::NotFound(key)));
        assert_eq!(
            store.update(key, FieldUpdate::MobileFriendly(true)).await,
            Err(SessionError::NotFound(key))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_after_timeout_is_rejected() {
        let store = store_with(120, false);
        let key = store.open("late").await;

        tokio::time::sleep(Duration::from_secs(121)).await;

        let err = store.commit(key).await.unwrap_err();
        assert!(is_rejection(&err), "unexpected error: {err:?}");
        assert!(store.get(key).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_updates_do_not_extend_timeout_by_default() {
        let store = store_with(120, false);
        let key = store.open("x").await;

        tokio::time::sleep(Duration::from_secs(100)).await;
        store.update(key, FieldUpdate::Style(FormatChoice::Bold)).await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;

        let err = store.update(key, FieldUpdate::Style(FormatChoice::Normal)).await.unwrap_err();
        assert!(is_rejection(&err));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_on_activity_extends_timeout() {
        let store = store_with(120, true);
        let key = store.open("x").await;

        tokio::time::sleep(Duration::from_secs(100)).await;
        store.update(key, FieldUpdate::Style(FormatChoice::Bold)).await.unwrap();
        tokio::time::sleep(Duration::from_secs(100)).await;

        let request = store.commit(key).await.unwrap();
        assert_eq!(request.style, FormatChoice::Bold);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_cancels_expiry_and_sessions_stay_isolated() {
        let store = store_with(10, false);
        let committed = store.open("a").await;
        let idle = store.open("b").await;

        store.update(idle, FieldUpdate::Foreground(ForegroundColor::Red)).await.unwrap();
        store.commit(committed).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(idle).await.unwrap().foreground(), ForegroundColor::Red);

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert!(store.is_empty().await);
    }
}
