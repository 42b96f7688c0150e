use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::types::config::EVENT_CHANNEL_CAPACITY;

/// 事件循环使用的原始互斥锁
pub type WatchRawMutex = CriticalSectionRawMutex;

/// 通道类型
pub type WatchChannel<T> = Channel<WatchRawMutex, T, EVENT_CHANNEL_CAPACITY>;

/// 通道接收者类型
pub type WatchChannelReceiver<'a, T> = Receiver<'a, WatchRawMutex, T, EVENT_CHANNEL_CAPACITY>;

/// 通道发送者类型
pub type WatchChannelSender<'a, T> = Sender<'a, WatchRawMutex, T, EVENT_CHANNEL_CAPACITY>;
