//! Text fragment interning for Weft.
//! Weft 文本片段驻留。
//!
//! This crate collapses repeatedly occurring short text runs into shared
//! canonical [`Fragment`]s:
//! - `CharTable`: the interning facade, one per session
//! - `StaticTable`: the process-wide table of well-known fragments
//! - `InternTable`: the hash-bucket store both are built on
//!
//! 本 crate 将重复出现的短文本合并为共享的规范 [`Fragment`]。

mod bucket;
pub mod catalog;
mod char_table;
mod config;
mod error;
mod fragment;
mod hash;
mod statics;
mod table;

pub use char_table::CharTable;
pub use config::{DEFAULT_INTERN_THRESHOLD, InternConfig};
pub use error::InternError;
pub use fragment::Fragment;
pub use hash::{range_hash_code, str_hash_code};
pub use statics::StaticTable;
pub use table::{InternTable, TableStats};
