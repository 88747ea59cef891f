//! 内容抽取器
//!
//! 随机源作为可注入的能力传入，测试中可替换为固定序列

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

/// 随机源：返回 `0..len` 内均匀分布的下标，调用方保证 `len > 0`
pub trait RandomSource {
    fn next_index(&mut self, len: usize) -> usize;
}

/// 基于 `rand` 生成器的随机源
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<ThreadRng> {
    /// 线程本地随机数生成器
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// 固定种子，结果可复现
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// 从非空列表中均匀随机地返回一个元素
pub fn pick_random<'a, T, S>(list: &'a [T], source: &mut S) -> Result<&'a T>
where
    S: RandomSource + ?Sized,
{
    if list.is_empty() {
        return Err(Error::invalid_argument("不能从空列表中抽取"));
    }

    let index = source.next_index(list.len());
    list.get(index).ok_or_else(|| {
        Error::invalid_argument(format!(
            "随机源返回了越界下标 {} (长度 {})",
            index,
            list.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QUOTES;
    use std::collections::HashSet;

    /// 总是返回同一下标的随机源
    struct FixedIndex(usize);

    impl RandomSource for FixedIndex {
        fn next_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    /// 总是返回最后一个下标的随机源
    struct LastIndex;

    impl RandomSource for LastIndex {
        fn next_index(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn test_pick_returns_element_of_list() {
        let lists: [&[&str]; 3] = [&["only"], &["a", "b"], &["x", "y", "z", "w"]];
        let mut source = RngSource::seeded(42);

        for list in lists {
            for _ in 0..100 {
                let picked = pick_random(list, &mut source).unwrap();
                assert!(list.contains(picked));
            }
        }
    }

    #[test]
    fn test_pick_first_with_zero_source() {
        let list = ["first", "second", "third"];
        let picked = pick_random(&list, &mut FixedIndex(0)).unwrap();
        assert_eq!(*picked, "first");
    }

    #[test]
    fn test_pick_last_with_max_source() {
        let list = ["first", "second", "third"];
        let picked = pick_random(&list, &mut LastIndex).unwrap();
        assert_eq!(*picked, "third");
    }

    #[test]
    fn test_pick_returns_reference_into_list() {
        let list = vec![String::from("a"), String::from("b")];
        let picked = pick_random(&list, &mut FixedIndex(1)).unwrap();
        assert!(std::ptr::eq(picked, &list[1]));
    }

    #[test]
    fn test_pick_covers_all_quotes() {
        let mut source = RngSource::thread();
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            seen.insert(QUOTES.pick(&mut source).unwrap());
        }

        assert_eq!(seen.len(), QUOTES.items().len(), "saw only {:?}", seen);
    }

    #[test]
    fn test_pick_empty_is_invalid_argument() {
        let empty: [&str; 0] = [];
        let result = pick_random(&empty, &mut RngSource::seeded(1));
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_pick_out_of_range_source_is_invalid_argument() {
        let list = ["a", "b"];
        let result = pick_random(&list, &mut FixedIndex(5));
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let list = ["a", "b", "c", "d", "e"];
        let mut first = RngSource::seeded(99);
        let mut second = RngSource::seeded(99);

        for _ in 0..20 {
            assert_eq!(
                pick_random(&list, &mut first).unwrap(),
                pick_random(&list, &mut second).unwrap()
            );
        }
    }
}
