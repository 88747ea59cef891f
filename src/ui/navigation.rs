//! 导航栈
//!
//! 注册的页面：`(tabs)`（不显示标题栏）和 `+not-found`

/// 路由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Tabs,
    NotFound,
}

/// 页面选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    pub name: &'static str,
    pub title: &'static str,
    pub header_shown: bool,
}

impl Route {
    pub fn options(self) -> ScreenOptions {
        match self {
            Route::Tabs => ScreenOptions {
                name: "(tabs)",
                title: "(tabs)",
                header_shown: false,
            },
            Route::NotFound => ScreenOptions {
                name: "+not-found",
                title: "Oops!",
                header_shown: true,
            },
        }
    }
}

/// 标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Explore,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Explore];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            Tab::Home => "Welcome! Press [r] for a fresh quote and fact.",
            Tab::Explore => "This app includes example code to help you get started.",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Home => Tab::Explore,
            Tab::Explore => Tab::Home,
        }
    }

    pub fn prev(self) -> Self {
        // 只有两个标签页
        self.next()
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// 导航栈：历史记录至少包含根路由
#[derive(Debug, Clone)]
pub struct Stack {
    history: Vec<Route>,
    pub tab: Tab,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Self {
            history: vec![Route::Tabs],
            tab: Tab::default(),
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Tabs)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!("导航 -> {}", route.options().name);
        self.history.push(route);
    }

    /// 返回上一页；根路由时不做任何事
    pub fn pop(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.history.pop()
    }
}
