use crate::types::TickTime;

/// 宿主提供的墙上时钟
pub trait WallClock {
    /// 当前本地时间
    fn now(&self) -> TickTime;

    /// 宿主的全局 24 小时制偏好
    fn is_24h_style(&self) -> bool;
}

impl<T: WallClock> WallClock for &T {
    fn now(&self) -> TickTime {
        (**self).now()
    }

    fn is_24h_style(&self) -> bool {
        (**self).is_24h_style()
    }
}
