//! 国际化（i18n）模块
//!
//! 纯 Rust 结构体方案：每种语言一份 `Translations` 常量，编译期检查缺失的键。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod ru_ru;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    RuRu,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::RuRu]
    }

    /// 语言自身文字的显示名称
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::RuRu => "Русский",
        }
    }

    /// BCP 47 代码，与配置文件的 `language` 一致
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::RuRu => "ru-RU",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "ru-RU" | "ru" => Some(Language::RuRu),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EnUs => 0,
            Language::RuRu => 1,
        }
    }
}

/// 当前语言索引
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &ru_ru::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::RuRu,
        _ => Language::EnUs,
    }
}
