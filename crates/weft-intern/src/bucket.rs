//! Hash buckets and collision chains.
//! 哈希桶与冲突链。

use crate::fragment::Fragment;

/// The canonical fragments stored under one hash code.
/// 同一哈希码下存储的规范片段。
///
/// A bucket only ever grows: `Empty` becomes `One`, `One` becomes `Many`,
/// and `Many` gains members at the end.
/// 桶只会增长：`Empty` 变为 `One`，`One` 变为 `Many`，`Many` 在末尾追加成员。
#[derive(Debug, Clone, Default)]
pub(crate) enum Bucket {
    #[default]
    Empty,
    One(Fragment),
    /// Fragments with distinct content, in insertion order.
    /// Always holds at least two members.
    Many(Vec<Fragment>),
}

impl Bucket {
    /// Find the member equal to `source[start..end]`.
    /// 查找与 `source[start..end]` 相等的成员。
    pub(crate) fn find(&self, source: &str, start: usize, end: usize) -> Option<&Fragment> {
        match self {
            Bucket::Empty => None,
            Bucket::One(fragment) => {
                subrange_equals(fragment, source, start, end).then_some(fragment)
            }
            Bucket::Many(chain) => {
                debug_assert!(chain.len() >= 2, "collision chain with {} members", chain.len());
                chain
                    .iter()
                    .find(|fragment| subrange_equals(fragment, source, start, end))
            }
        }
    }

    /// Return the member equal to `source[start..end]`, adding a fresh copy if
    /// none exists. The flag is true when a copy was added.
    /// 返回与 `source[start..end]` 相等的成员，如不存在则添加新副本。
    pub(crate) fn get_or_insert(
        &mut self,
        source: &str,
        start: usize,
        end: usize,
    ) -> (Fragment, bool) {
        if let Some(existing) = self.find(source, start, end) {
            return (existing.clone(), false);
        }

        let added = Fragment::new(&source[start..end]);
        *self = match std::mem::take(self) {
            Bucket::Empty => Bucket::One(added.clone()),
            Bucket::One(existing) => Bucket::Many(vec![existing, added.clone()]),
            Bucket::Many(mut chain) => {
                chain.push(added.clone());
                Bucket::Many(chain)
            }
        };
        (added, true)
    }

    /// Number of fragments in this bucket.
    pub(crate) fn len(&self) -> usize {
        match self {
            Bucket::Empty => 0,
            Bucket::One(_) => 1,
            Bucket::Many(chain) => chain.len(),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Fragment> {
        let members: &[Fragment] = match self {
            Bucket::Empty => &[],
            Bucket::One(fragment) => std::slice::from_ref(fragment),
            Bucket::Many(chain) => chain,
        };
        members.iter()
    }
}

/// Content comparison between a stored fragment and `source[start..end]`.
///
/// The pointer check only fires when the compared bytes are the very same
/// memory, so it never changes the result.
fn subrange_equals(candidate: &Fragment, source: &str, start: usize, end: usize) -> bool {
    if candidate.len() != end - start {
        return false;
    }
    if start == 0 && candidate.shares_start_with(source) {
        return true;
    }
    candidate.as_bytes() == &source.as_bytes()[start..end]
}
