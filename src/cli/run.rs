// ============================================================================
// Chroma - CLI Run 命令
// ============================================================================
//
// 文件: src/cli/run.rs
// 职责: 启动机器人的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 读取连接令牌，缺失时直接失败
//   - ✅ 调用聊天平台模块启动
//   - ❌ 不应包含事件处理逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::bot;
use crate::models::config::Config;
use crate::{t, tf};

/// 启动机器人命令
#[derive(Debug, Args)]
pub struct RunArgs {
    /// 跳过启动时的命令同步
    #[arg(long)]
    pub no_sync: bool,
}

pub async fn run(args: RunArgs) -> Result<()> {
    info!("{}", t!("run.start"));

    if let Ok(path) = dotenvy::dotenv() {
        info!("{}", tf!("run.env_loaded", path.display()));
    }

    let mut config = Config::current()?;
    if args.no_sync {
        config.bot.sync_commands = false;
    }

    // 没有令牌时不尝试连接，错误由入口统一输出
    let token = config.token()?;

    bot::start(&config, &token).await
}
