//! Mutex-protected intern tables.
//! 受互斥锁保护的驻留表。

use crate::bucket::Bucket;
use crate::error::require_range;
use crate::fragment::Fragment;
use crate::hash::str_hash_code;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

/// A get-or-insert store of canonical fragments keyed by content hash.
/// 以内容哈希为键的规范片段存储。
///
/// Every operation holds the table's lock for its whole lookup-then-insert
/// sequence, so concurrent callers interning equal content always receive the
/// same fragment.
/// 每个操作在整个"查找后插入"过程中持有锁，因此并发驻留相同内容的调用方
/// 总是得到同一个片段。
#[derive(Debug, Default)]
pub struct InternTable {
    buckets: Mutex<FxHashMap<u32, Bucket>>,
}

/// A snapshot of table occupancy.
/// 表占用情况的快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Distinct hash codes in use.
    pub buckets: usize,
    /// Canonical fragments stored.
    pub fragments: usize,
    /// Buckets holding more than one fragment.
    pub collision_chains: usize,
    /// Total bytes of stored fragment text.
    pub bytes: usize,
}

impl InternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the canonical fragment for `source[start..end]` without
    /// inserting. `hash` must be the range's hash code.
    /// 查找 `source[start..end]` 的规范片段，不插入。
    ///
    /// # Panics
    ///
    /// Panics if `start..end` does not address whole chars of `source`.
    pub fn lookup(&self, hash: u32, source: &str, start: usize, end: usize) -> Option<Fragment> {
        require_range(source, start, end);
        let buckets = self.buckets.lock();
        buckets
            .get(&hash)
            .and_then(|bucket| bucket.find(source, start, end))
            .cloned()
    }

    /// Return the canonical fragment for `source[start..end]`, storing a fresh
    /// copy if the content is new to this table.
    /// 返回 `source[start..end]` 的规范片段，如内容是新的则存储新副本。
    ///
    /// # Panics
    ///
    /// Panics if `start..end` does not address whole chars of `source`.
    pub fn get_or_insert(&self, hash: u32, source: &str, start: usize, end: usize) -> Fragment {
        require_range(source, start, end);
        let mut buckets = self.buckets.lock();
        let bucket = buckets.entry(hash).or_default();
        let (fragment, added) = bucket.get_or_insert(source, start, end);
        if added {
            if bucket.len() > 1 {
                tracing::trace!(hash, chain = bucket.len(), text = %fragment, "collision chain grew");
            } else {
                tracing::trace!(hash, text = %fragment, "interned new fragment");
            }
        }
        fragment
    }

    /// Look up `text` as a whole.
    pub fn get(&self, text: &str) -> Option<Fragment> {
        self.lookup(str_hash_code(text), text, 0, text.len())
    }

    /// Intern `text` as a whole.
    pub fn add(&self, text: &str) -> Fragment {
        self.get_or_insert(str_hash_code(text), text, 0, text.len())
    }

    /// Number of canonical fragments stored.
    pub fn len(&self) -> usize {
        self.buckets.lock().values().map(Bucket::len).sum()
    }

    /// Returns true if no fragment has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> TableStats {
        let buckets = self.buckets.lock();
        let mut stats = TableStats {
            buckets: buckets.len(),
            ..TableStats::default()
        };
        for bucket in buckets.values() {
            stats.fragments += bucket.len();
            if bucket.len() > 1 {
                stats.collision_chains += 1;
            }
            stats.bytes += bucket.iter().map(|fragment| fragment.len()).sum::<usize>();
        }
        stats
    }
}
