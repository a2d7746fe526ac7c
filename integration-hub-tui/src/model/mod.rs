//! Model 层：应用的全部状态
//!
//! ```text
//! App
//!  ├── focus / navigation / current_page     布局与导航
//!  ├── screens[ScreenKind]                   列表页（各持有一个轮询控制器）
//!  ├── connection / home                     非列表页
//!  ├── modal                                 弹窗（登录、命令表单、帮助）
//!  └── core                                  后端服务，update 层通过它发命令
//! ```

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::{App, StatusLine};
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{ConnectionState, HomeState, ListScreenState, Modal, ModalState};
