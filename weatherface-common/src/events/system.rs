use crate::types::{AppMessage, AppMessageResult, TickTime, TimeUnits};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    TimeEvent(crate::events::TimeEvent),
    MessageEvent(crate::events::MessageEvent),
    WindowEvent(crate::events::WindowEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEvent {
    MinuteTick {
        time: TickTime,
        units_changed: TimeUnits,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    InboxReceived(AppMessage),
    InboxDropped(AppMessageResult),
    OutboxSent(AppMessage),
    OutboxFailed(AppMessage, AppMessageResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Load,
    Unload,
}

impl SystemEvent {
    pub fn minute_tick(time: TickTime, units_changed: TimeUnits) -> Self {
        SystemEvent::TimeEvent(TimeEvent::MinuteTick {
            time,
            units_changed,
        })
    }
}
