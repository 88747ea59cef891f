//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Tick, // 动画帧

    // 导航
    NextTab,
    PrevTab,
    OpenMissingRoute,
    Back,

    Remount, // 重新挂载屏幕（重新抽取名言和冷知识）
}
