// ============================================================================
// Chroma - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Run related
    ("run.start", "Starting chroma bot..."),
    ("run.env_loaded", "Loaded environment from {}"),
    // Bot related
    ("bot.connecting", "Connecting to gateway..."),
    ("bot.logged_in", "Logged in as {} (ID: {})"),
    ("bot.syncing_commands", "Syncing commands globally..."),
    ("bot.sync_completed", "Command sync completed successfully ({} commands)"),
    ("bot.sync_failed", "Error syncing commands: {}"),
    ("bot.ready", "Bot is ready!"),
    ("bot.unknown_command", "Ignoring unknown command: {}"),
    ("bot.command_rejected", "Rejected command invocation: {}"),
    ("bot.component_rejected", "Rejected component event {}: {}"),
    ("bot.reply_failed", "Failed to reply to interaction: {}"),
    // Session related
    ("session.opened", "Session {} opened (timeout {}s)"),
    ("session.updated", "Session {} updated: {}"),
    ("session.committed", "Session {} committed"),
    ("session.expired", "Session {} expired"),
    // Init related
    ("init.start", "Initializing chroma configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    ("init.use_force_hint", "Use --force to overwrite existing config file"),
    ("init.config_created", "Config file created: {}"),
    ("init.create_failed", "Failed to create config file: {}"),
    ("init.next_steps", "Set DISCORD_TOKEN (or the configured token variable) and run `chroma run`"),
    // Preview related
    ("preview.rendered", "Rendered:"),
    ("preview.message", "Message:"),
];
