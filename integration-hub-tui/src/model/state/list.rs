//! 列表页状态
//!
//! 数据（记录、加载中、错误、展开项）由 [`PollingListController`] 持有，
//! 这里只保存纯 UI 状态：光标、搜索框、过滤选项。

use integration_hub_core::types::{QueryFilter, Record, ScreenKind, SourceMode};
use integration_hub_core::utils::search::filter_records;
use integration_hub_core::{ControllerState, PollingListController};

/// 流程列表可选的状态过滤
pub const STATUS_OPTIONS: [&str; 5] = ["all", "running", "completed", "terminated", "error"];

/// 单个列表页的状态
pub struct ListScreenState {
    pub kind: ScreenKind,
    pub controller: PollingListController,
    /// 光标在可见记录中的位置
    pub cursor: usize,
    /// 已提交的搜索文本
    pub search_text: String,
    /// 编辑中的搜索文本，`None` 表示未在编辑
    pub search_draft: Option<String>,
    pub status_index: usize,
    pub source_mode: SourceMode,
    /// 是否已发出过首次加载
    pub loaded: bool,
}

impl ListScreenState {
    pub fn new(kind: ScreenKind, controller: PollingListController) -> Self {
        Self {
            kind,
            controller,
            cursor: 0,
            search_text: String::new(),
            search_draft: None,
            status_index: 0,
            source_mode: SourceMode::default(),
            loaded: false,
        }
    }

    /// 只有全部流程列表按状态过滤
    pub fn supports_status(&self) -> bool {
        self.kind == ScreenKind::WorkflowRuns
    }

    /// 只有运行中列表可切换 api / db 数据源
    pub fn supports_source(&self) -> bool {
        self.kind == ScreenKind::RunningRuns
    }

    pub fn supports_search(&self) -> bool {
        self.kind.capabilities().has_filters
    }

    /// 搜索在本地完成，不需要重新请求
    pub fn searches_locally(&self) -> bool {
        !self.kind.local_search_fields().is_empty()
    }

    pub fn is_editing_search(&self) -> bool {
        self.search_draft.is_some()
    }

    pub fn status_filter(&self) -> &'static str {
        STATUS_OPTIONS[self.status_index % STATUS_OPTIONS.len()]
    }

    pub fn cycle_status(&mut self) {
        self.status_index = (self.status_index + 1) % STATUS_OPTIONS.len();
    }

    /// 当前 UI 选项组成的查询条件
    pub fn query_filter(&self) -> QueryFilter {
        QueryFilter {
            search_text: self.search_text.clone(),
            status_filter: if self.supports_status() {
                self.status_filter().to_string()
            } else {
                String::new()
            },
            source_mode: self.source_mode,
        }
    }

    /// 经过本地搜索后可见的记录
    pub fn visible_records<'a>(&self, state: &'a ControllerState) -> Vec<&'a Record> {
        if self.searches_locally() {
            filter_records(&state.records, self.kind.local_search_fields(), &self.search_text)
        } else {
            state.records.iter().collect()
        }
    }

    pub fn visible_len(&self) -> usize {
        self.controller
            .with_state(|state| self.visible_records(state).len())
    }

    /// 光标所在记录
    pub fn cursor_record(&self) -> Option<Record> {
        self.controller.with_state(|state| {
            self.visible_records(state)
                .get(self.cursor)
                .map(|record| (*record).clone())
        })
    }

    /// 列表变短后把光标拉回范围内
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn select_previous(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }
}
