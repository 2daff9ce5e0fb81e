// ============================================================================
// Chroma - UI 模块
// ============================================================================
//
// 文件: src/ui/mod.rs
// 职责: 聊天平台上可见的命令和表单定义
// 边界:
//   - ✅ 命令声明
//   - ✅ 选择表单布局
//   - ❌ 不应包含事件处理逻辑
//
// ============================================================================

pub mod commands;
pub mod form;
