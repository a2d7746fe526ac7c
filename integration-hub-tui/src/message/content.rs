//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// 展开 / 收起光标所在记录
    ToggleExpand,
    /// 用当前过滤条件重新加载
    Reload,
    ToggleAutoRefresh,

    // 搜索输入
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,

    /// 切换状态过滤（all → running → ...）
    CycleStatus,
    /// 切换数据源 api / db
    ToggleSource,

    /// 页面专属操作
    Action(ScreenAction),
}

/// 页面专属操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    // ERP 文档
    SyncDocuments,
    ClearDocuments,
    CreateDeal,
    CheckDeal,
    SyncWithCrm,
    EnrichDocument,
    EnrichAll,
    Export,

    // 交易变更
    Rollback,
    EnrichUsers,
    DealHistory,

    // 流程诊断
    TestDirectApi,
    CheckDbTables,

    // ERP 连接
    TestConnection,
    EditConnection,
}
