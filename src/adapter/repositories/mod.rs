//! # Repository Implementations
//!
//! Domain層のRepository traitに対するAdapter層の実装

pub mod git_commit_log_repository;
pub mod http_time_entry_repository;
