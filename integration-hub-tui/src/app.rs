//! 应用主循环
//!
//! 大约每 100 ms 一轮：
//!
//! ```text
//! loop {
//!     排空收件箱                  后台结果 / 通知 → update
//!     terminal.draw(view::render) 渲染 UI（列表数据直接读控制器快照）
//!     if app.should_quit { break }
//!     poll_event(100ms)           有按键则 handle_event → update
//! }
//! ```
//!
//! 控制器的状态变化不经过消息：它们在后台任务里写入 watch 通道，
//! 下一次绘制时自然可见，所以轮询间隔就是最长的刷新延迟。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Inbox;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, inbox: &mut Inbox) -> Result<()> {
    loop {
        // 1. 后台结果
        drain_inbox(app, inbox);

        // 2. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 把两个通道里已到达的消息全部交给 update
fn drain_inbox(app: &mut App, inbox: &mut Inbox) {
    while let Ok(message) = inbox.background.try_recv() {
        update::update(app, AppMessage::Background(message));
    }
    while let Ok(notification) = inbox.notifications.try_recv() {
        update::update(app, AppMessage::Notify(notification));
    }
}
