//! Immutable, shareable text fragments.
//! 不可变、可共享的文本片段。

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable run of text backed by a reference-counted allocation.
/// 由引用计数分配支持的不可变文本片段。
///
/// Cloning a fragment shares the allocation. Two fragments returned by the
/// same intern table for equal content are the same allocation, which
/// [`Fragment::ptr_eq`] checks.
/// 同一个驻留表对相同内容返回的两个片段共享同一分配。
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fragment(Arc<str>);

impl Fragment {
    /// Copy `text` into a fresh allocation.
    /// 将 `text` 复制到新的分配中。
    pub fn new(text: &str) -> Self {
        Fragment(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both fragments share one allocation.
    /// 如果两个片段共享同一分配则返回 true。
    pub fn ptr_eq(a: &Fragment, b: &Fragment) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Returns true if `text` starts at this fragment's allocation.
    pub(crate) fn shares_start_with(&self, text: &str) -> bool {
        std::ptr::eq(self.0.as_ptr(), text.as_ptr())
    }
}

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Fragment {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::new(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment(Arc::from(text))
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({:?})", &*self.0)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
