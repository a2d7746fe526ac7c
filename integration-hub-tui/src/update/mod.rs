//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。键盘消息与后台结果都从 [`update`] 进入：
//!
//! ```text
//! update
//!  ├── navigation   左侧导航，进入页面时触发首次加载
//!  ├── content      列表页 / 连接页的按键与页面操作
//!  ├── modal        弹窗输入与提交
//!  └── background   后台任务结果回写
//! ```
//!
//! 需要网络的操作都交给 `CoreService` 或列表控制器在后台执行，
//! 这里只负责发起并立即返回。

mod background;
mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, StatusLine};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 弹窗打开时不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Background(bg_msg) => background::update(app, bg_msg),

        AppMessage::Notify(notification) => {
            app.status = Some(StatusLine::from(notification));
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                // 未登录时登录框不能关闭
                if !app.modal.is_login() {
                    app.modal.close();
                }
            } else if app.focus.is_content() {
                app.focus = app.focus.toggle();
            } else {
                app.clear_status();
            }
        }

        AppMessage::ShowHelp => {
            if !app.modal.is_open() {
                app.modal.show_help();
            }
        }

        AppMessage::Logout => {
            if app.authenticated {
                app.core.logout();
            }
        }

        AppMessage::Noop => {}
    }
}
