//! 系统事件定义模块
//!
//! 本模块定义了表盘事件循环处理的全部事件类型，包括：
//! - 时间事件 (TimeEvent)：每分钟一次的 tick
//! - 消息事件 (MessageEvent)：与手机伴侣应用之间的收发结果
//! - 窗口事件 (WindowEvent)：窗口加载与卸载
//!
//! 所有事件都实现了 Debug、Clone 和 Eq trait，便于日志记录和测试断言。

pub mod system;
pub use system::{MessageEvent, SystemEvent, TimeEvent, WindowEvent};
