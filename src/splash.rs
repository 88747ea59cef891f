//! 启动画面控制器
//!
//! 入口处调用 `prevent_auto_hide` 保持启动画面，首帧绘制后的挂载钩子调用 `hide`。
//! 若从未调用 `hide`，在 Drop 时隐藏。

use chrono::{DateTime, Local};

#[derive(Debug)]
pub struct SplashScreen {
    shown_at: DateTime<Local>,
    visible: bool,
}

impl SplashScreen {
    /// 阻止启动画面自动隐藏
    pub fn prevent_auto_hide() -> Self {
        tracing::debug!("启动画面保持显示");
        Self {
            shown_at: Local::now(),
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// 隐藏启动画面，重复调用无副作用
    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        let elapsed = Local::now() - self.shown_at;
        tracing::info!("启动画面已隐藏, 显示了 {} ms", elapsed.num_milliseconds());
    }
}

impl Drop for SplashScreen {
    fn drop(&mut self) {
        if self.visible {
            tracing::warn!("启动画面在挂载前被释放");
            self.hide();
        }
    }
}
