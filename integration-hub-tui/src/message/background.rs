//! 后台任务结果

use integration_hub_core::types::{Connection, ConnectionStatus, Record, ScreenKind};

/// 后台任务回传给 UI 的结果
///
/// 失败由任务自己发成通知，这里只携带需要改动 Model 的结果。
#[derive(Debug, Clone)]
pub enum BackgroundMessage {
    /// 启动时读取令牌的结果
    SessionRestored { authenticated: bool },
    /// 登录结束，失败时带上提示信息
    LoginFinished(Result<(), String>),
    LoggedOut,
    /// 命令成功后需要刷新的列表
    Reload(ScreenKind),
    DealHistory { deal_id: String, records: Vec<Record> },
    ConnectionLoaded(Option<Connection>),
    ConnectionTested(ConnectionStatus),
    ConnectionSaved,
    /// 诊断输出（已格式化）
    Diagnostics(String),
}
