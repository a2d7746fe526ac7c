//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 需要 Shift 的字符键（大写字母、`?`），终端可能带或不带 SHIFT 修饰
    pub const fn shifted(c: char) -> Self {
        Self::new(KeyModifiers::SHIFT, KeyCode::Char(c))
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.modifiers == KeyModifiers::SHIFT {
            return key.code == self.code
                && (key.modifiers == KeyModifiers::SHIFT || key.modifiers.is_empty());
        }
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::shifted('?');
    pub const LOGOUT: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 列表
    pub const EXPAND: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const RELOAD: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const AUTO_REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('a'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const CYCLE_STATUS: KeyBinding = KeyBinding::key(KeyCode::Char('s'));
    pub const TOGGLE_SOURCE: KeyBinding = KeyBinding::key(KeyCode::Char('m'));

    // ERP 文档
    pub const SYNC_DOCUMENTS: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const CLEAR_DOCUMENTS: KeyBinding = KeyBinding::shifted('X');
    pub const CREATE_DEAL: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const CHECK_DEAL: KeyBinding = KeyBinding::key(KeyCode::Char('v'));
    pub const SYNC_WITH_CRM: KeyBinding = KeyBinding::key(KeyCode::Char('b'));
    pub const ENRICH_DOCUMENT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const ENRICH_ALL: KeyBinding = KeyBinding::shifted('E');
    pub const EXPORT: KeyBinding = KeyBinding::key(KeyCode::Char('x'));

    // 交易变更
    pub const ROLLBACK: KeyBinding = KeyBinding::key(KeyCode::Char('o'));
    pub const ENRICH_USERS: KeyBinding = KeyBinding::key(KeyCode::Char('u'));
    pub const DEAL_HISTORY: KeyBinding = KeyBinding::key(KeyCode::Char('h'));

    // 流程诊断
    pub const TEST_DIRECT_API: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const CHECK_DB_TABLES: KeyBinding = KeyBinding::key(KeyCode::Char('g'));

    // ERP 连接
    pub const TEST_CONNECTION: KeyBinding = KeyBinding::key(KeyCode::Char('t'));
    pub const EDIT_CONNECTION: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
}
