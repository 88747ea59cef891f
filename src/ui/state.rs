//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及生命周期枚举

use crate::models::Selection;
use crate::picker::RandomSource;
use crate::splash::SplashScreen;
use crate::theme::{ColorScheme, StyleSet, style_for};

use super::animation::{Animation, Effect};
use super::navigation::Stack;

/// 每个动画的帧数（启用动画时）
pub const ANIMATION_FRAMES: u16 = 8;

/// 屏幕生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Mounted,
}

/// 应用状态
pub struct App {
    pub scheme: ColorScheme,
    pub styles: StyleSet,
    pub splash: SplashScreen,
    pub stack: Stack,
    pub quote: Selection,
    pub fact: Selection,
    pub header_anim: Animation,
    pub content_anim: Animation,
    pub lifecycle: Lifecycle,
    pub mount_count: u32,
    pub exiting: bool,
    pub message: Option<String>,
    pub(super) animation_frames: u16,
    pub(super) source: Box<dyn RandomSource>,
}

impl App {
    /// 创建新的应用实例，尚未挂载
    pub fn new(
        scheme: ColorScheme,
        splash: SplashScreen,
        source: Box<dyn RandomSource>,
        animations: bool,
    ) -> Self {
        let animation_frames = if animations { ANIMATION_FRAMES } else { 0 };
        Self {
            scheme,
            styles: style_for(scheme),
            splash,
            stack: Stack::new(),
            quote: Selection::Uninitialized,
            fact: Selection::Uninitialized,
            header_anim: Animation::new(Effect::SlideInLeft, animation_frames),
            content_anim: Animation::new(Effect::FadeIn, animation_frames),
            lifecycle: Lifecycle::Unmounted,
            mount_count: 0,
            exiting: false,
            message: None,
            animation_frames,
            source,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }
}
