// ============================================================================
// Chroma - 国际化模块
// ============================================================================
//
// 文件: src/i18n/mod.rs
// 职责: 日志和终端提示的翻译管理
// 边界:
//   - ✅ 翻译表选择
//   - ✅ 翻译宏定义和实现
//   - ✅ 参数化翻译支持
//   - ❌ 不应包含具体翻译内容
//   - ❌ 不应翻译发送到聊天平台的内容
//
// ============================================================================

pub mod en_us;
pub mod zh_cn;

type Table = &'static [(&'static str, &'static str)];

fn table_for(language: &str) -> Table {
    match language {
        "zh_cn" => zh_cn::TRANSLATIONS,
        _ => en_us::TRANSLATIONS,
    }
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// 获取翻译文本，当前语言缺失时回退到英文
pub fn get_translation(key: &str) -> String {
    // 配置未初始化时（如单元测试）使用英文
    let language = crate::models::config::Config::get_language()
        .unwrap_or_else(|_| "en_us".to_string());

    lookup(table_for(&language), key)
        .or_else(|| lookup(en_us::TRANSLATIONS, key))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown translation key: {}", key))
}

/// 简单翻译宏
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get_translation($key)
    };
}

/// 依次替换模板中的 {} 占位符
pub fn format_with_args(template: String, args: Vec<String>) -> String {
    let mut result = template;
    let mut from = 0;
    for arg in args.iter() {
        match result[from..].find("{}") {
            Some(pos) => {
                let start = from + pos;
                result.replace_range(start..start + 2, arg);
                from = start + arg.len();
            }
            None => break,
        }
    }
    result
}

/// 带参数的翻译宏
#[macro_export]
macro_rules! tf {
    ($key:expr, $($arg:expr),*) => {{
        let template = $crate::i18n::get_translation($key);
        let args = vec![$(format!("{}", $arg)),*];
        $crate::i18n::format_with_args(template, args)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_are_filled_in_order() {
        let out = format_with_args("{} of {}".to_string(), vec!["1".into(), "2".into()]);
        assert_eq!(out, "1 of 2");
    }

    #[test]
    fn test_argument_containing_braces_is_not_rescanned() {
        let out = format_with_args("{} then {}".to_string(), vec!["{}".into(), "x".into()]);
        assert_eq!(out, "{} then x");
    }

    #[test]
    fn test_tables_share_keys() {
        for (key, _) in en_us::TRANSLATIONS {
            assert!(lookup(zh_cn::TRANSLATIONS, key).is_some(), "zh_cn missing {key}");
        }
        assert_eq!(zh_cn::TRANSLATIONS.len(), en_us::TRANSLATIONS.len());
    }

    #[test]
    fn test_unknown_key_is_reported() {
        assert_eq!(get_translation("no.such.key"), "Unknown translation key: no.such.key");
        assert_eq!(crate::tf!("session.committed", "abc"), "Session abc committed");
    }
}
