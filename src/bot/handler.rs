// ============================================================================
// Chroma - 事件处理器
// ============================================================================
//
// 文件: src/bot/handler.rs
// 职责: 聊天平台网关事件到交互处理器的桥接
// 边界:
//   - ✅ 就绪事件：命令同步、状态设置
//   - ✅ 交互事件：命令、右键菜单、表单组件分发
//   - ✅ 平台回复调用
//   - ❌ 不应包含格式化逻辑
//   - ❌ 不应包含会话状态管理
//
// ============================================================================

use anyhow::Result;
use serenity::all::{
    ActivityData, Command, CommandDataOptionValue, CommandInteraction, CommandType,
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EventHandler,
    Interaction, Ready, ResolvedTarget,
};
use serenity::async_trait;
use tracing::{debug, error, info, warn};

use crate::core::interaction::{ComponentOutcome, InteractionHandler, OptionValue};
use crate::models::config::BotConfig;
use crate::ui::commands::all_commands;
use crate::ui::form::build_form;
use crate::utils::constants::{command, form};
use crate::{t, tf};

/// 网关事件处理器
pub struct Handler {
    interactions: InteractionHandler,
    bot: BotConfig,
}

impl Handler {
    pub fn new(interactions: InteractionHandler, bot: BotConfig) -> Self {
        Self { interactions, bot }
    }

    /// 全局同步命令，失败只记录日志，不影响启动
    async fn sync_commands(&self, ctx: &Context) {
        info!("{}", t!("bot.syncing_commands"));
        match Command::set_global_commands(&ctx.http, all_commands()).await {
            Ok(commands) => info!("{}", tf!("bot.sync_completed", commands.len())),
            Err(e) => error!("{}", tf!("bot.sync_failed", e)),
        }
    }

    async fn on_command(&self, ctx: &Context, interaction: &CommandInteraction) -> Result<()> {
        if interaction.data.kind == CommandType::Message {
            return self.on_context_menu(ctx, interaction).await;
        }
        if interaction.data.name != command::NAME {
            debug!("{}", tf!("bot.unknown_command", &interaction.data.name));
            return Ok(());
        }

        let options: Vec<(String, OptionValue)> = interaction
            .data
            .options
            .iter()
            .filter_map(|option| {
                let value = match &option.value {
                    CommandDataOptionValue::String(s) => OptionValue::Str(s.clone()),
                    CommandDataOptionValue::Integer(i) => OptionValue::Int(*i),
                    _ => return None,
                };
                Some((option.name.clone(), value))
            })
            .collect();

        let content = match self.interactions.handle_command(&options) {
            Ok(content) => content,
            Err(e) => {
                warn!("{}", tf!("bot.command_rejected", e));
                return Ok(());
            }
        };

        let message = CreateInteractionResponseMessage::new().content(content).ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    async fn on_context_menu(&self, ctx: &Context, interaction: &CommandInteraction) -> Result<()> {
        let content = match interaction.data.target() {
            Some(ResolvedTarget::Message(message)) => message.content.clone(),
            _ => String::new(),
        };

        let key = self.interactions.open_form(&content).await;
        let message = CreateInteractionResponseMessage::new()
            .content(form::PROMPT)
            .components(build_form(key))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    async fn on_component(&self, ctx: &Context, interaction: &ComponentInteraction) -> Result<()> {
        let values = match &interaction.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => values.clone(),
            _ => Vec::new(),
        };

        let outcome =
            match self.interactions.handle_component(&interaction.data.custom_id, &values).await {
                Ok(outcome) => outcome,
                // 过期或无效的表单：不回复，由平台显示通用失败提示
                Err(e) => {
                    debug!("{}", tf!("bot.component_rejected", &interaction.data.custom_id, e));
                    return Ok(());
                }
            };

        interaction.create_response(&ctx.http, CreateInteractionResponse::Acknowledge).await?;

        if let ComponentOutcome::Committed { content } = outcome {
            interaction.delete_response(&ctx.http).await?;
            interaction
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new().content(content).ephemeral(true),
                )
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{}", tf!("bot.logged_in", &ready.user.name, ready.user.id));

        if self.bot.sync_commands {
            self.sync_commands(&ctx).await;
        }

        ctx.set_activity(Some(ActivityData::listening(&self.bot.activity)));
        info!("{}", t!("bot.ready"));
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let result = match &interaction {
            Interaction::Command(command) => self.on_command(&ctx, command).await,
            Interaction::Component(component) => self.on_component(&ctx, component).await,
            _ => Ok(()),
        };

        if let Err(e) = result {
            error!("{}", tf!("bot.reply_failed", e));
        }
    }
}
