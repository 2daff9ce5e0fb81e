// ============================================================================
// Chroma - 聊天平台模块
// ============================================================================
//
// 文件: src/bot/mod.rs
// 职责: 网关客户端构建和启动
// 边界:
//   - ✅ 客户端构建（意图、事件处理器）
//   - ✅ 连接并持续运行
//   - ❌ 不应包含令牌读取
//   - ❌ 不应包含事件处理细节
//
// ============================================================================

pub mod handler;

use anyhow::{Context as _, Result};
use serenity::all::GatewayIntents;
use serenity::Client;
use tracing::info;

use crate::core::interaction::InteractionHandler;
use crate::core::sessions::SessionStore;
use crate::models::config::Config;
use crate::t;
use handler::Handler;

/// 连接聊天平台并处理事件，直到连接断开
pub async fn start(config: &Config, token: &str) -> Result<()> {
    let interactions = InteractionHandler::new(SessionStore::new(config.session_store_config()));
    let handler = Handler::new(interactions, config.bot.clone());

    let mut client = Client::builder(token, GatewayIntents::non_privileged())
        .event_handler(handler)
        .await
        .context("failed to build client")?;

    info!("{}", t!("bot.connecting"));
    client.start().await.context("client stopped with error")?;
    Ok(())
}
