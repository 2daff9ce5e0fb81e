// ============================================================================
// Chroma - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 默认配置文件生成
//   - ✅ 配置文件存在性检查
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含业务逻辑处理
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::models::config::Config;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs, config_path: &PathBuf) -> Result<()> {
    info!("{}", t!("init.start"));

    // 检查配置文件是否已存在
    if config_path.exists() && !args.force {
        warn!("{}", tf!("init.config_exists", config_path.display()));
        info!("{}", t!("init.use_force_hint"));
        return Ok(());
    }

    match Config::create_default_config_file(config_path) {
        Ok(_) => {
            info!("{}", tf!("init.config_created", config_path.display()));
            info!("{}", t!("init.next_steps"));
        }
        Err(e) => {
            error!("{}", tf!("init.create_failed", e));
            return Err(e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_template_and_respects_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chroma.toml");

        handle_init(InitArgs { force: false }, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "[session]\ntimeout_secs = 9\n").unwrap();
        handle_init(InitArgs { force: false }, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().session.timeout_secs, 9);

        handle_init(InitArgs { force: true }, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().session.timeout_secs, 120);
    }
}
