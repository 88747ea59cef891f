//! 内容数据模型
//!
//! 固定的名言/冷知识列表，以及每次挂载时的选中状态

use crate::error::Result;
use crate::picker::{RandomSource, pick_random};

/// 固定、有序、非空的字符串列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentList {
    pub title: &'static str,
    items: &'static [&'static str],
}

impl ContentList {
    /// 创建列表；空列表在构造时直接 panic（常量上下文中即编译期错误）
    pub const fn new(title: &'static str, items: &'static [&'static str]) -> Self {
        assert!(!items.is_empty(), "ContentList 不能为空");
        Self { title, items }
    }

    pub fn items(&self) -> &'static [&'static str] {
        self.items
    }

    pub fn contains(&self, value: &str) -> bool {
        self.items.contains(&value)
    }

    /// 从列表中均匀随机地抽取一项
    pub fn pick<S: RandomSource + ?Sized>(&self, source: &mut S) -> Result<&'static str> {
        pick_random(self.items(), source).copied()
    }
}

/// 名言列表
pub const QUOTES: ContentList = ContentList::new(
    "Quote of the Day:",
    &[
        "The best way to predict the future is to invent it.",
        "Life is what happens when you're busy making other plans.",
        "Success is not the key to happiness. Happiness is the key to success.",
        "You miss 100% of the shots you don’t take.",
        "The only limit to our realization of tomorrow is our doubts of today.",
    ],
);

/// 冷知识列表
pub const FACTS: ContentList = ContentList::new(
    "Did You Know?",
    &[
        "Honey never spoils.",
        "Bananas are berries, but strawberries aren't.",
        "There are more stars in the universe than grains of sand on Earth.",
        "A day on Venus is longer than a year on Venus.",
        "Some cats are allergic to humans.",
    ],
);

/// 单次挂载内的选中结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Uninitialized,
    Selected(&'static str),
}

impl Selection {
    /// 未选中时返回空字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Uninitialized => "",
            Selection::Selected(value) => value,
        }
    }
}
