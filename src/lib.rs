//! 闭整数区间 [`IntRange`] 与增量合并的区间集合 [`IntInterval`]。
//!
//! ```
//! use int_interval::{IntInterval, IntRange};
//!
//! let mut interval = IntInterval::new();
//! interval.add_range(IntRange::new(10, 12));
//! interval.add_range(IntRange::new(13, 14));
//!
//! assert!(interval.contains(13));
//! assert!(!interval.contains(9));
//! assert_eq!(interval.ranges(), &[IntRange::new(10, 14)]);
//! ```
mod interval;
mod range;

use thiserror::Error;

pub use interval::IntInterval;
pub use range::IntRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// 两个区间之间至少隔着一个整数，无法合并。
    #[error("can not merge separated ranges {left} and {right}")]
    NotMergeable { left: IntRange, right: IntRange },
}

pub type Result<T> = std::result::Result<T, Error>;
