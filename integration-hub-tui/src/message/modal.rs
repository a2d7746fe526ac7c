//! 弹窗消息

/// 弹窗消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    Close,
    NextField,
    PrevField,
    /// 选项类字段（同步条数）向左
    PrevOption,
    /// 选项类字段（同步条数）向右
    NextOption,
    Input(char),
    Backspace,
    Confirm,
    ScrollUp,
    ScrollDown,
}
