use crate::types::{DisplayError, Rect, RegionStyle, TextRegion};

/// 文本显示端口
///
/// 表盘只通过此 trait 驱动宿主的窗口系统：
/// - 创建/销毁文本区域
/// - 设置文本与样式
///
/// 字体渲染和布局由宿主负责。
pub trait TextDisplay {
    /// 创建文本区域，样式由 `set_style` 另行设置
    fn create_region(&mut self, region: TextRegion, frame: Rect) -> Result<(), DisplayError>;

    /// 设置区域显示的文本
    fn set_text(&mut self, region: TextRegion, text: &str) -> Result<(), DisplayError>;

    /// 修改区域样式
    fn set_style(&mut self, region: TextRegion, style: RegionStyle) -> Result<(), DisplayError>;

    /// 销毁文本区域
    fn destroy_region(&mut self, region: TextRegion) -> Result<(), DisplayError>;
}
