//! ERP 连接页状态

use integration_hub_core::types::{Connection, ConnectionStatus};

#[derive(Debug, Default)]
pub struct ConnectionState {
    pub connection: Option<Connection>,
    /// 最近一次测试结果，未测试为 `None`
    pub status: Option<ConnectionStatus>,
    pub loading: bool,
    pub loaded: bool,
}

impl ConnectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_connection(&mut self, connection: Option<Connection>) {
        self.connection = connection;
        self.loading = false;
        self.loaded = true;
    }
}
