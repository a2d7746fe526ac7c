//! 各页面与弹窗的状态

mod connection;
mod home;
mod list;
mod modal;

pub use connection::ConnectionState;
pub use home::HomeState;
pub use list::{ListScreenState, STATUS_OPTIONS};
pub use modal::{Modal, ModalState};
