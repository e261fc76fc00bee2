//! The process-wide static table.
//! 进程级静态表。

use crate::catalog;
use crate::fragment::Fragment;
use crate::table::{InternTable, TableStats};
use std::sync::LazyLock;

static STATIC_TABLE: LazyLock<StaticTable> = LazyLock::new(StaticTable::seeded);

/// The long-lived intern table shared by every [`CharTable`](crate::CharTable).
/// 所有 [`CharTable`](crate::CharTable) 共享的长生命周期驻留表。
///
/// The table is seeded with the built-in catalog on first access and lives
/// until the process exits. It never shrinks. Embedding systems add their own
/// well-known constants with [`StaticTable::register_all`].
/// 该表在首次访问时载入内置目录，并存活到进程退出，从不收缩。
#[derive(Debug)]
pub struct StaticTable {
    table: InternTable,
}

impl StaticTable {
    /// The process-wide instance.
    pub fn global() -> &'static StaticTable {
        &STATIC_TABLE
    }

    fn seeded() -> Self {
        let table = InternTable::new();
        for text in catalog::builtin() {
            table.add(&text);
        }
        tracing::debug!(fragments = table.len(), "seeded static intern table");
        StaticTable { table }
    }

    /// Canonical fragment for `text`, if registered. Never inserts.
    pub fn get(&self, text: &str) -> Option<Fragment> {
        self.table.get(text)
    }

    pub(crate) fn lookup(&self, hash: u32, source: &str, start: usize, end: usize) -> Option<Fragment> {
        self.table.lookup(hash, source, start, end)
    }

    /// Register `text` regardless of its length and return its canonical
    /// fragment.
    pub fn register(&self, text: &str) -> Fragment {
        self.table.add(text)
    }

    /// Register a batch of well-known constants.
    /// 注册一批常用常量。
    pub fn register_all<I>(&self, texts: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let before = self.table.len();
        for text in texts {
            self.table.add(text.as_ref());
        }
        tracing::debug!(
            added = self.table.len() - before,
            "registered static intern seeds"
        );
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }
}
