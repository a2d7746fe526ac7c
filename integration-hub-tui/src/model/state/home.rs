//! 首页状态

use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct HomeState {
    /// 最近一次诊断输出
    pub diagnostics: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl HomeState {
    pub fn new(log_file: Option<PathBuf>) -> Self {
        Self {
            diagnostics: None,
            log_file,
        }
    }
}
