use crate::types::{AppMessage, AppMessageResult};

/// 与手机伴侣应用通信的发件箱
///
/// 发送是“发出即忘”的：`send` 只报告消息是否被接受，
/// 投递结果稍后以 `MessageEvent::OutboxSent` / `OutboxFailed` 事件送达。
pub trait AppMessageOutbox {
    /// 收件箱可协商的最大字节数
    fn inbox_size_maximum(&self) -> usize;

    /// 发件箱可协商的最大字节数
    fn outbox_size_maximum(&self) -> usize;

    /// 以给定的缓冲区大小打开消息通道
    fn open(&mut self, inbox_size: usize, outbox_size: usize) -> Result<(), AppMessageResult>;

    /// 提交一条消息
    fn send(&mut self, message: &AppMessage) -> Result<(), AppMessageResult>;
}
