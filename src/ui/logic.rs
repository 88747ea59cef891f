//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和屏幕生命周期

use super::actions::Action;
use super::animation::{Animation, Effect};
use super::navigation::Route;
use super::state::{App, Lifecycle};
use crate::models::{ContentList, FACTS, QUOTES, Selection};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return self.start_exit(),
            Action::Tick => return self.tick(),

            Action::NextTab => {
                self.message = None;
                self.stack.tab = self.stack.tab.next();
            }
            Action::PrevTab => {
                self.message = None;
                self.stack.tab = self.stack.tab.prev();
            }
            Action::OpenMissingRoute => {
                self.message = None;
                self.stack.push(Route::NotFound);
            }
            Action::Back => {
                self.message = match self.stack.pop() {
                    Some(_) => None,
                    None => Some("已经在首页".to_string()),
                };
            }

            // 退出动画期间不再重新挂载
            Action::Remount if self.exiting => {}
            Action::Remount => self.remount(),
        }
        false
    }

    // ============ 生命周期 ============

    /// 首帧绘制后的挂载钩子：隐藏启动画面并抽取内容，每次挂载只执行一次
    pub fn on_first_paint(&mut self) {
        if self.is_mounted() {
            return;
        }

        self.splash.hide();
        self.quote = self.select(QUOTES);
        self.fact = self.select(FACTS);
        self.lifecycle = Lifecycle::Mounted;
        self.mount_count += 1;

        debug_assert!(
            self.quote == Selection::Uninitialized || QUOTES.contains(self.quote.as_str())
        );
        debug_assert!(
            self.fact == Selection::Uninitialized || FACTS.contains(self.fact.as_str())
        );

        tracing::info!(
            mount = self.mount_count,
            scheme = ?self.scheme,
            quote = self.quote.as_str(),
            fact = self.fact.as_str(),
            "屏幕已挂载"
        );
    }

    /// 卸载屏幕，下一帧绘制后重新挂载
    pub fn remount(&mut self) {
        self.lifecycle = Lifecycle::Unmounted;
        self.quote = Selection::Uninitialized;
        self.fact = Selection::Uninitialized;
        self.header_anim = Animation::new(Effect::SlideInLeft, self.animation_frames);
        self.content_anim = Animation::new(Effect::FadeIn, self.animation_frames);
        self.message = None;
    }

    fn select(&mut self, list: ContentList) -> Selection {
        match list.pick(self.source.as_mut()) {
            Ok(value) => Selection::Selected(value),
            Err(e) => {
                tracing::error!("抽取 {:?} 失败: {}", list.title, e);
                Selection::Uninitialized
            }
        }
    }

    // ============ 动画 ============

    /// 开始退出动画；动画关闭或再次退出时立即退出
    fn start_exit(&mut self) -> bool {
        if self.exiting {
            return true;
        }
        self.exiting = true;
        self.header_anim = Animation::new(Effect::FadeOut, self.animation_frames);
        self.header_anim.is_done()
    }

    fn tick(&mut self) -> bool {
        self.header_anim.tick();
        self.content_anim.tick();
        self.exiting && self.header_anim.effect == Effect::FadeOut && self.header_anim.is_done()
    }
}
