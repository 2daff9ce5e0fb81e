// ============================================================================
// Chroma - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含聊天平台调用
//
// ============================================================================

pub mod formatter;
pub mod interaction;
pub mod sessions;

// 重新导出常用类型
pub use formatter::format_response;
pub use interaction::{ComponentOutcome, InteractionHandler};
pub use sessions::{SessionStore, SessionStoreConfig};
