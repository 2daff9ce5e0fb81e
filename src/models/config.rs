// ============================================================================
// Chroma - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 连接令牌读取
//   - ❌ 不应包含 CLI 参数解析
//   - ❌ 不应包含聊天平台连接逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::core::sessions::{SessionStoreConfig, DEFAULT_IDLE_TIMEOUT_SECS};
use crate::error::ConfigError;
use crate::utils::constants::DEFAULT_TOKEN_ENV;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// Chroma 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 机器人配置
    #[serde(default)]
    pub bot: BotConfig,
    /// 选择会话配置
    #[serde(default)]
    pub session: SessionConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 机器人配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    /// 保存连接令牌的环境变量名
    #[serde(default = "Config::default_token_env")]
    pub token_env: String,
    /// "正在收听" 状态显示的内容
    #[serde(default = "Config::default_activity")]
    pub activity: String,
    /// 启动时是否同步命令
    #[serde(default = "Config::default_sync_commands")]
    pub sync_commands: bool,
}

/// 选择会话配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// 空闲超时时间（秒）
    #[serde(default = "Config::default_timeout_secs")]
    pub timeout_secs: u64,
    /// 字段更新时是否重新计时
    #[serde(default)]
    pub reset_on_activity: bool,
}

/// 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
    pub session_timeout: Option<u64>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_token_env() -> String {
        DEFAULT_TOKEN_ENV.to_string()
    }

    fn default_activity() -> String {
        "/chroma".to_string()
    }

    fn default_sync_commands() -> bool {
        true
    }

    fn default_timeout_secs() -> u64 {
        DEFAULT_IDLE_TIMEOUT_SECS
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(config_path: &Path, args: RuntimeArgs) -> anyhow::Result<()> {
        let mut config = Self::load_from(config_path)?;
        config.apply_runtime_args(args);
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .map_err(|source| ConfigError::Read { path: config_path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: config_path.to_path_buf(), source })
    }

    /// 合并运行时参数
    pub fn apply_runtime_args(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(timeout) = args.session_timeout {
            self.session.timeout_secs = timeout;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &PathBuf) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &PathBuf) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 从环境变量读取连接令牌，空值视为缺失
    pub fn token(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.bot.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::MissingToken(self.bot.token_env.clone())),
        }
    }

    pub fn session_store_config(&self) -> SessionStoreConfig {
        SessionStoreConfig {
            idle_timeout: Duration::from_secs(self.session.timeout_secs),
            reset_on_activity: self.session.reset_on_activity,
        }
    }

    /// 全局配置的副本
    pub fn current() -> anyhow::Result<Config> {
        Self::read_global(|config| config.clone())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::read_global(|config| config.i18n.language.clone())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::read_global(|config| config.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        Self::read_global(|config| config.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    fn read_global<T>(read: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(read(&config))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            session: SessionConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token_env: Config::default_token_env(),
            activity: Config::default_activity(),
            sync_commands: Config::default_sync_commands(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { timeout_secs: Config::default_timeout_secs(), reset_on_activity: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { verbose: Config::default_verbose(), colored: Config::default_colored() }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self { language: Config::default_language() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("chroma.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session.timeout_secs, 120);
        assert!(!config.session.reset_on_activity);
        assert_eq!(config.bot.token_env, "DISCORD_TOKEN");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chroma.toml");
        std::fs::write(&path, "[session]\ntimeout_secs = 30\n\n[bot]\nactivity = \"/paint\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.session.timeout_secs, 30);
        assert_eq!(config.bot.activity, "/paint");
        assert!(config.bot.sync_commands);
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chroma.toml");
        std::fs::write(&path, "[session]\ntimeout_secs = \"soon\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_saved_template_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chroma.toml");
        Config::create_default_config_file(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_runtime_args_override_file_values() {
        let mut config = Config::default();
        config.apply_runtime_args(RuntimeArgs {
            verbose: Some(true),
            colored: Some(false),
            language: Some("zh_cn".to_string()),
            session_timeout: Some(5),
        });
        assert!(config.output.verbose);
        assert!(!config.output.colored);
        assert_eq!(config.i18n.language, "zh_cn");
        assert_eq!(config.session_store_config().idle_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let mut config = Config::default();
        config.bot.token_env = "CHROMA_TEST_TOKEN_THAT_IS_NEVER_SET".to_string();
        match config.token() {
            Err(ConfigError::MissingToken(name)) => {
                assert_eq!(name, "CHROMA_TEST_TOKEN_THAT_IS_NEVER_SET")
            }
            other => panic!("expected missing token, got {other:?}"),
        }

        let err = config.token().unwrap_err();
        assert_eq!(
            err.to_string(),
            "CHROMA_TEST_TOKEN_THAT_IS_NEVER_SET not found in environment variables"
        );
    }
}
