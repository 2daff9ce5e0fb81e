// ============================================================================
// Chroma - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 启动相关
    ("run.start", "正在启动 chroma 机器人..."),
    ("run.env_loaded", "已从 {} 加载环境变量"),
    // 机器人相关
    ("bot.connecting", "正在连接网关..."),
    ("bot.logged_in", "已登录为 {} (ID: {})"),
    ("bot.syncing_commands", "正在全局同步命令..."),
    ("bot.sync_completed", "命令同步完成（共 {} 个命令）"),
    ("bot.sync_failed", "命令同步失败: {}"),
    ("bot.ready", "机器人已就绪！"),
    ("bot.unknown_command", "忽略未知命令: {}"),
    ("bot.command_rejected", "已拒绝命令调用: {}"),
    ("bot.component_rejected", "已拒绝组件事件 {}: {}"),
    ("bot.reply_failed", "回复交互失败: {}"),
    // 会话相关
    ("session.opened", "会话 {} 已创建（超时 {} 秒）"),
    ("session.updated", "会话 {} 已更新: {}"),
    ("session.committed", "会话 {} 已提交"),
    ("session.expired", "会话 {} 已过期"),
    // 初始化相关
    ("init.start", "正在初始化 chroma 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.create_failed", "创建配置文件失败: {}"),
    ("init.next_steps", "设置 DISCORD_TOKEN（或配置的令牌变量）后运行 `chroma run`"),
    // 预览相关
    ("preview.rendered", "渲染效果:"),
    ("preview.message", "消息内容:"),
];
