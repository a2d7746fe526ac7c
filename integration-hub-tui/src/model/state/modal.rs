//! 弹窗/对话框状态

use integration_hub_core::types::{ConnectionForm, Record, SYNC_LIMITS};

/// 弹窗
#[derive(Debug, Clone)]
pub enum Modal {
    /// 登录（会话没有令牌时常驻）
    Login {
        username: String,
        password: String,
        /// 0=用户名, 1=密码
        focus: usize,
        /// 请求已发出，等待结果
        pending: bool,
        error: Option<String>,
    },
    /// 从 ERP 同步文档
    SyncDocuments {
        /// `SYNC_LIMITS` 中的索引
        limit_index: usize,
    },
    /// 清空文档确认
    ConfirmClear,
    /// 检查 CRM 交易是否存在
    CheckDeal { deal_id: String },
    /// 回滚交易阶段
    Rollback {
        deal_id: String,
        target_stage_id: String,
        focus: usize,
    },
    /// 交易历史：先输入 ID，结果到达后显示列表
    DealHistory {
        deal_id: String,
        records: Option<Vec<Record>>,
        scroll: u16,
    },
    /// 编辑 ERP 连接
    EditConnection {
        url: String,
        username: String,
        password: String,
        focus: usize,
    },
    /// 诊断输出
    Diagnostics { text: String, scroll: u16 },
    Help { scroll: u16 },
}

impl Modal {
    /// 默认同步条数：20
    pub const DEFAULT_LIMIT_INDEX: usize = 2;

    pub fn login() -> Self {
        Modal::Login {
            username: String::new(),
            password: String::new(),
            focus: 0,
            pending: false,
            error: None,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Modal::Login { .. })
    }

    /// 是否有输入框（决定 ↑↓ 是切换字段还是滚动）
    pub fn has_inputs(&self) -> bool {
        self.field_count() > 0
    }

    /// 可输入字段数量
    fn field_count(&self) -> usize {
        match self {
            Modal::Login { .. } | Modal::Rollback { .. } => 2,
            Modal::EditConnection { .. } => 3,
            Modal::CheckDeal { .. } => 1,
            Modal::DealHistory { records, .. } => usize::from(records.is_none()),
            Modal::SyncDocuments { .. }
            | Modal::ConfirmClear
            | Modal::Diagnostics { .. }
            | Modal::Help { .. } => 0,
        }
    }

    fn focus_mut(&mut self) -> Option<&mut usize> {
        match self {
            Modal::Login { focus, .. }
            | Modal::Rollback { focus, .. }
            | Modal::EditConnection { focus, .. } => Some(focus),
            _ => None,
        }
    }

    /// 当前获得焦点的输入框
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self {
            Modal::Login {
                username,
                password,
                focus,
                pending: false,
                ..
            } => Some(if *focus == 0 { username } else { password }),
            Modal::CheckDeal { deal_id } => Some(deal_id),
            Modal::DealHistory {
                deal_id,
                records: None,
                ..
            } => Some(deal_id),
            Modal::Rollback {
                deal_id,
                target_stage_id,
                focus,
            } => Some(if *focus == 0 { deal_id } else { target_stage_id }),
            Modal::EditConnection {
                url,
                username,
                password,
                focus,
            } => Some(match *focus {
                0 => url,
                1 => username,
                _ => password,
            }),
            _ => None,
        }
    }

    pub fn next_field(&mut self) {
        let count = self.field_count();
        if let Some(focus) = self.focus_mut() {
            *focus = (*focus + 1) % count.max(1);
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.field_count().max(1);
        if let Some(focus) = self.focus_mut() {
            *focus = (*focus + count - 1) % count;
        }
    }

    /// 同步条数向左 / 向右
    pub fn shift_option(&mut self, forward: bool) {
        if let Modal::SyncDocuments { limit_index } = self {
            *limit_index = if forward {
                (*limit_index + 1).min(SYNC_LIMITS.len() - 1)
            } else {
                limit_index.saturating_sub(1)
            };
        }
    }

    pub fn scroll(&mut self, down: bool) {
        if let Modal::DealHistory { scroll, .. }
        | Modal::Diagnostics { scroll, .. }
        | Modal::Help { scroll } = self
        {
            *scroll = if down {
                scroll.saturating_add(1)
            } else {
                scroll.saturating_sub(1)
            };
        }
    }

    /// 连接弹窗中的表单
    pub fn connection_form(&self) -> Option<ConnectionForm> {
        match self {
            Modal::EditConnection {
                url,
                username,
                password,
                ..
            } => Some(ConnectionForm {
                url: url.clone(),
                username: username.clone(),
                password: password.clone(),
            }),
            _ => None,
        }
    }
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_login(&self) -> bool {
        self.active.as_ref().is_some_and(Modal::is_login)
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help { scroll: 0 });
    }
}
