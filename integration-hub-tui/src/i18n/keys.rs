//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. 文本归属于它出现的 UI 组件
//! 2. 弹窗内容归 `modal.*`
//! 3. 后台任务结果（状态栏通知）归 `notify.*`
//! 4. 跨组件复用归 `common.*`

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub list: ListTexts,
    pub connection: ConnectionTexts,
    pub modal: ModalTexts,
    pub notify: NotifyTexts,
    pub hints: HintTexts,
    pub help: HelpTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub error: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub all: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub workflow_runs: &'static str,
    pub running_runs: &'static str,
    pub timeline: &'static str,
    pub deal_changes: &'static str,
    pub documents: &'static str,
    pub connection: &'static str,
}

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub description: &'static str,
    pub session: &'static str,
    pub signed_in: &'static str,
    pub signed_out: &'static str,
    pub refresh_interval: &'static str,
    pub log_file: &'static str,
    pub diagnostics: &'static str,
    pub no_diagnostics: &'static str,
}

/// 列表页文本
pub struct ListTexts {
    pub records: &'static str,
    pub auto_refresh: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub status: &'static str,
    pub source: &'static str,
    pub detail: &'static str,
    pub detail_loading: &'static str,
    pub no_records: &'static str,
    pub no_matches: &'static str,
    pub actions: &'static str,
}

/// 连接页文本
pub struct ConnectionTexts {
    pub active: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub username: &'static str,
    pub status: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub unknown: &'static str,
    pub not_configured: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub login_title: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub logging_in: &'static str,
    pub rollback_title: &'static str,
    pub deal_id: &'static str,
    pub target_stage_id: &'static str,
    pub history_title: &'static str,
    pub no_history: &'static str,
    pub check_deal_title: &'static str,
    pub sync_title: &'static str,
    pub limit: &'static str,
    pub clear_title: &'static str,
    pub clear_confirm: &'static str,
    pub connection_title: &'static str,
    pub url: &'static str,
    pub diagnostics_title: &'static str,
    pub help_title: &'static str,
    pub submit_hint: &'static str,
}

/// 后台任务结果
pub struct NotifyTexts {
    pub login_ok: &'static str,
    pub logged_out: &'static str,
    pub documents_synced: &'static str,
    pub documents_cleared: &'static str,
    pub deal_created: &'static str,
    pub deal_exists: &'static str,
    pub deal_missing: &'static str,
    pub crm_synced: &'static str,
    pub document_enriched: &'static str,
    pub enrich_all_done: &'static str,
    pub enrich_nothing: &'static str,
    pub exported: &'static str,
    pub rollback_done: &'static str,
    pub users_enriched: &'static str,
    pub direct_api: &'static str,
    pub connection_saved: &'static str,
    pub connection_online: &'static str,
    pub connection_offline: &'static str,
    pub auto_refresh_on: &'static str,
    pub auto_refresh_off: &'static str,
    pub auto_refresh_unavailable: &'static str,
    pub no_selection: &'static str,
}

/// 状态栏按键提示
pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub expand: &'static str,
    pub reload: &'static str,
    pub auto_refresh: &'static str,
    pub search: &'static str,
    pub status: &'static str,
    pub source: &'static str,
    pub actions: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub confirm: &'static str,
    pub cancel: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub global: &'static str,
    pub lists: &'static str,
    pub documents: &'static str,
    pub deals: &'static str,
    pub runs: &'static str,
    pub connection: &'static str,
    pub lines_global: &'static [(&'static str, &'static str)],
    pub lines_lists: &'static [(&'static str, &'static str)],
    pub lines_documents: &'static [(&'static str, &'static str)],
    pub lines_deals: &'static [(&'static str, &'static str)],
    pub lines_runs: &'static [(&'static str, &'static str)],
    pub lines_connection: &'static [(&'static str, &'static str)],
}
