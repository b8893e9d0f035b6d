use std::{fmt, mem, slice};

use crate::IntRange;

/// 按插入顺序保存的一组 [`IntRange`]。
///
/// 每次 [`add_range`](IntInterval::add_range) 都会把新区间与所有可合并的成员合并，
/// 所以集合中任意两个区间都不可合并。[`pack`](IntInterval::pack) 之后按 `from` **降序**排列。
#[derive(Default, Clone, PartialEq, Eq)]
pub struct IntInterval {
    ranges: Vec<IntRange>,
}

impl IntInterval {
    pub fn new() -> Self {
        Default::default()
    }

    /// 保存的区间个数。
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// 覆盖的整数总数。
    pub fn size(&self) -> u64 {
        self.ranges
            .iter()
            .fold(0u64, |acc, rng| acc.saturating_add(rng.size()))
    }

    pub fn ranges(&self) -> &[IntRange] {
        &self.ranges
    }

    pub fn iter(&self) -> slice::Iter<'_, IntRange> {
        self.ranges.iter()
    }

    /// 按当前存储顺序扫描，遇到第一个包含 `value` 的区间即返回。
    pub fn contains(&self, value: i64) -> bool {
        self.ranges.iter().any(|rng| rng.contains(value))
    }

    /// `range` 是否被某一个已存区间完全覆盖。
    pub fn contains_range(&self, range: &IntRange) -> bool {
        self.ranges.iter().any(|rng| rng.is_covering(range))
    }

    /// 插入 `range`，并与已有区间合并。
    ///
    /// 先以 `range` 的**原始**边界找出所有可合并的成员，再按存储顺序依次并入，
    /// 把这些成员全部移除，最后把合并后的区间追加到末尾。其余成员保持相对顺序。
    ///
    /// 集合本身不含可合并的成员对，因此被并入的成员之外不会有区间与结果相接，
    /// 一次扫描即可得到完全合并的集合。
    pub fn add_range(&mut self, range: IntRange) {
        let mut merged = range;
        let before = self.ranges.len();
        self.ranges.retain(|existing| {
            if !range.can_merge(existing) {
                return true;
            }
            // existing 与 range 相接，而 merged ⊇ range，所以 hull 仍是连续的
            merged = merged.hull(existing);
            false
        });
        let absorbed = before - self.ranges.len();
        self.ranges.push(merged);
        tracing::trace!(%range, absorbed, %merged, "add_range");
    }

    /// 从空集合开始按当前顺序重新插入每个区间，然后按 `from` 降序排序。
    pub fn pack(&mut self) {
        let _span = tracing::debug_span!("pack").entered();
        let old = mem::take(&mut self.ranges);
        let before = old.len();
        self.ranges.reserve(before);
        for rng in old {
            self.add_range(rng);
        }
        self.ranges.sort_unstable_by(|a, b| b.start().cmp(&a.start()));
        tracing::debug!(before, after = self.ranges.len(), "packed");
    }
}

impl fmt::Debug for IntInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set_builder = f.debug_set();
        for rng in &self.ranges {
            set_builder.entry(&(rng.start()..=rng.end()));
        }
        set_builder.finish()
    }
}

impl<'a> IntoIterator for &'a IntInterval {
    type Item = &'a IntRange;
    type IntoIter = slice::Iter<'a, IntRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl<T: Into<IntRange>> Extend<T> for IntInterval {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_range(item.into());
        }
    }
}

impl<T: Into<IntRange>> FromIterator<T> for IntInterval {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut interval = IntInterval::new();
        interval.extend(iter);
        interval
    }
}
