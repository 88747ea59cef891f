//! 进入/退出动画
//!
//! 每个动画只播放一次，由 Tick 推进

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    SlideInLeft,
    FadeIn,
    FadeOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub effect: Effect,
    frame: u16,
    frames: u16,
}

impl Animation {
    /// `frames == 0` 时动画立即完成
    pub fn new(effect: Effect, frames: u16) -> Self {
        Self {
            effect,
            frame: 0,
            frames,
        }
    }

    pub fn tick(&mut self) {
        if self.frame < self.frames {
            self.frame += 1;
        }
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// 0.0 ~ 1.0
    pub fn progress(&self) -> f32 {
        if self.frames == 0 {
            return 1.0;
        }
        f32::from(self.frame) / f32::from(self.frames)
    }

    /// SlideInLeft: 当前帧相对最终位置向左偏移的列数
    pub fn slide_offset(&self, width: u16) -> u16 {
        match self.effect {
            Effect::SlideInLeft => (f32::from(width) * (1.0 - self.progress())).round() as u16,
            _ => 0,
        }
    }

    /// 是否处于半透明（淡入前半段或淡出后半段）
    pub fn is_dimmed(&self) -> bool {
        match self.effect {
            Effect::FadeIn => self.progress() < 0.5,
            Effect::FadeOut => self.progress() >= 0.5,
            Effect::SlideInLeft => false,
        }
    }

    /// 淡出结束后不再绘制
    pub fn is_hidden(&self) -> bool {
        self.effect == Effect::FadeOut && self.is_done()
    }
}
