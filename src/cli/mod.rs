// ============================================================================
// Chroma - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod init;
pub mod preview;
pub mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::config::{Config, RuntimeArgs};
use crate::utils::constants::CONFIG_FILE;
use crate::utils::logger;
use init::{handle_init, InitArgs};
use preview::{handle_preview, PreviewArgs};
use run::{run, RunArgs};

/// Chroma - ANSI colorizer chat bot
#[derive(Debug, Parser)]
#[command(name = "chroma")]
#[command(about = "Chat bot that turns text into colorized ANSI code blocks")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Selection form idle timeout (seconds)
    #[arg(long, global = true)]
    pub session_timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect to the chat platform and serve commands
    Run(RunArgs),
    /// Initialize configuration file
    Init(InitArgs),
    /// Format a message locally without connecting
    Preview(PreviewArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Merge runtime args into the global config
    Config::initialize(&cli.config, build_runtime_args(&cli))?;
    logger::init(Config::get_verbose(), Config::get_colored());

    match cli.command {
        Commands::Run(args) => run(args).await,
        Commands::Init(args) => handle_init(args, &cli.config),
        Commands::Preview(args) => handle_preview(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
        session_timeout: cli.session_timeout,
    }
}
