//! The interning facade.
//! 驻留门面。

use crate::config::InternConfig;
use crate::error::{InternError, check_range, require_range};
use crate::fragment::Fragment;
use crate::hash::range_hash_code;
use crate::statics::StaticTable;
use crate::table::{InternTable, TableStats};
use std::ops::Range;

/// Collapses equal short fragments into shared canonical instances.
/// 将相同的短片段合并为共享的规范实例。
///
/// Lookups consult the process-wide [`StaticTable`] first and this table's
/// own instance table second. Fragments longer than the configured threshold
/// are never stored.
/// 查找时先查询进程级 [`StaticTable`]，再查询本表自己的实例表。
/// 超过阈值的片段从不存储。
///
/// ```
/// use weft_intern::{CharTable, Fragment};
///
/// let table = CharTable::new();
/// let a = table.intern_str("let");
/// let b = table.intern_str_range("  let x", 2..5);
/// assert!(Fragment::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct CharTable {
    config: InternConfig,
    entries: InternTable,
}

impl CharTable {
    /// Create a table with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InternConfig) -> Self {
        Self {
            config,
            entries: InternTable::new(),
        }
    }

    pub fn config(&self) -> &InternConfig {
        &self.config
    }

    /// Intern a whole fragment.
    /// 驻留整个片段。
    ///
    /// A fragment above the threshold is returned as-is.
    /// 超过阈值的片段按原样返回。
    pub fn intern(&self, text: &Fragment) -> Fragment {
        if self.config.is_eligible(text.len()) {
            self.two_tier(text, 0, text.len())
        } else {
            text.clone()
        }
    }

    /// Intern a borrowed string. A string above the threshold is copied into
    /// a fresh, unshared fragment.
    pub fn intern_str(&self, text: &str) -> Fragment {
        if self.config.is_eligible(text.len()) {
            self.two_tier(text, 0, text.len())
        } else {
            Fragment::new(text)
        }
    }

    /// Intern `base[range]`.
    /// 驻留 `base[range]`。
    ///
    /// # Panics
    ///
    /// Panics if `range` does not address whole chars of `base`.
    /// 如果 `range` 不能完整定位 `base` 中的字符则 panic。
    pub fn intern_range(&self, base: &Fragment, range: Range<usize>) -> Fragment {
        require_range(base, range.start, range.end);
        if range.len() == base.len() {
            self.intern(base)
        } else {
            self.intern_unchecked(base, range)
        }
    }

    /// Intern `base[range]` where `base` is a borrowed string.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not address whole chars of `base`.
    pub fn intern_str_range(&self, base: &str, range: Range<usize>) -> Fragment {
        require_range(base, range.start, range.end);
        self.intern_unchecked(base, range)
    }

    /// Intern `base[range]`, reporting a bad range instead of panicking.
    pub fn try_intern_range(&self, base: &str, range: Range<usize>) -> Result<Fragment, InternError> {
        check_range(base, range.start, range.end)?;
        Ok(self.intern_unchecked(base, range))
    }

    fn intern_unchecked(&self, base: &str, range: Range<usize>) -> Fragment {
        if self.config.is_eligible(range.len()) {
            self.two_tier(base, range.start, range.end)
        } else {
            Fragment::new(&base[range])
        }
    }

    /// The static lock is released before the instance lock is taken.
    fn two_tier(&self, source: &str, start: usize, end: usize) -> Fragment {
        let hash = range_hash_code(source, start, end);
        if let Some(interned) = StaticTable::global().lookup(hash, source, start, end) {
            return interned;
        }
        self.entries.get_or_insert(hash, source, start, end)
    }

    /// Canonical static fragment for `text`, if registered. Never inserts.
    pub fn static_interned(text: &str) -> Option<Fragment> {
        StaticTable::global().get(text)
    }

    /// Register `text` in the process-wide static table, whatever its length.
    pub fn static_intern(text: &str) {
        StaticTable::global().register(text);
    }

    /// Occupancy of this table's own instance entries.
    pub fn instance_stats(&self) -> TableStats {
        self.entries.stats()
    }

    /// Number of fragments stored in this table's instance entries.
    pub fn instance_len(&self) -> usize {
        self.entries.len()
    }
}
