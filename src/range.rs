use std::{fmt, ops::RangeInclusive};

use crate::{Error, Result};

/// inclusive
///
/// 闭区间 `[from, to]`，始终满足 `from <= to`。
/// 构造时若参数顺序颠倒会自动交换；之后只有合并操作会修改它。
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct IntRange {
    from: i64,
    to: i64,
}

impl IntRange {
    #[inline]
    pub fn new(a: i64, b: i64) -> Self {
        if a > b {
            IntRange { from: b, to: a }
        } else {
            IntRange { from: a, to: b }
        }
    }

    /// 下界 `from`。
    #[inline]
    pub fn start(&self) -> i64 {
        self.from
    }

    /// 上界 `to`，包含在区间内。
    #[inline]
    pub fn end(&self) -> i64 {
        self.to
    }

    /// 区间内整数的个数，即 `to - from + 1`。
    ///
    /// 只有覆盖整个 `i64` 值域的区间无法用 `u64` 表示，此时饱和为 `u64::MAX`。
    #[inline]
    pub fn size(&self) -> u64 {
        self.to.abs_diff(self.from).saturating_add(1)
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.from <= value && value <= self.to
    }

    /// 两个区间首尾**恰好相邻**：没有间隙，也没有重叠。
    ///
    /// 示例: `[10, 20].is_touching(&[21, 22])` -> `true`
    ///       `[10, 20].is_touching(&[2, 9])`   -> `true`
    ///       `[10, 20].is_touching(&[22, 25])` -> `false` (中间空了 21)
    #[inline]
    pub fn is_touching(&self, other: &Self) -> bool {
        // 边界上的 +1/-1 用 checked 运算，i64::MAX / i64::MIN 之外没有相邻的区间
        self.to.checked_add(1) == Some(other.from) || self.from.checked_sub(1) == Some(other.to)
    }

    /// `other` 恰好有一个端点落在 `self` 内，即部分重叠且互不包含。
    ///
    /// 示例: `[10, 20].is_slicing(&[15, 25])` -> `true`
    ///       `[10, 20].is_slicing(&[9, 21])`  -> `false` (完全包含)
    #[inline]
    pub fn is_slicing(&self, other: &Self) -> bool {
        self.contains(other.from) != self.contains(other.to)
    }

    /// `self` 完全落在 `other` 之内。相同的区间互为 inside。
    #[inline]
    pub fn is_inside(&self, other: &Self) -> bool {
        other.contains(self.from) && other.contains(self.to)
    }

    /// `other` 完全落在 `self` 之内，是 [`is_inside`](Self::is_inside) 的镜像。
    #[inline]
    pub fn is_covering(&self, other: &Self) -> bool {
        other.is_inside(self)
    }

    /// 只要两者之间没有至少一个整数的间隙，就可以合并。
    #[inline]
    pub fn can_merge(&self, other: &Self) -> bool {
        self.is_covering(other)
            || self.is_inside(other)
            || self.is_slicing(other)
            || self.is_touching(other)
    }

    /// 用 `self` 与 `other` 的并集原地替换 `self`。
    ///
    /// 若两者不可合并，返回 [`Error::NotMergeable`]，`self` 保持不变。
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        *self = Self::merged(self, other)?;
        Ok(())
    }

    /// 与 [`merge`](Self::merge) 相同，但结果写入 `target`，`self` 不变。
    pub fn merge_to(&self, target: &mut Self) -> Result<()> {
        *target = Self::merged(self, target)?;
        Ok(())
    }

    /// 返回两个区间的并集，不修改任何一方。
    pub fn merged(left: &Self, right: &Self) -> Result<Self> {
        if left.can_merge(right) {
            Ok(left.hull(right))
        } else {
            Err(Error::NotMergeable {
                left: *left,
                right: *right,
            })
        }
    }

    /// 能同时覆盖两者的最小区间，不做可合并检查。
    #[inline]
    pub(crate) fn hull(&self, other: &Self) -> Self {
        IntRange {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.from, self.to)
    }
}

impl From<(i64, i64)> for IntRange {
    #[inline]
    fn from(rng: (i64, i64)) -> Self {
        IntRange::new(rng.0, rng.1)
    }
}

impl From<RangeInclusive<i64>> for IntRange {
    #[inline]
    fn from(rng: RangeInclusive<i64>) -> Self {
        IntRange::new(*rng.start(), *rng.end())
    }
}

impl From<&RangeInclusive<i64>> for IntRange {
    #[inline]
    fn from(rng: &RangeInclusive<i64>) -> Self {
        IntRange::new(*rng.start(), *rng.end())
    }
}

impl From<IntRange> for RangeInclusive<i64> {
    #[inline]
    fn from(rng: IntRange) -> Self {
        rng.from..=rng.to
    }
}
