//! Search and tag predicates shared by the UI, the HTTP API and the CLI.
//!
//! All functions are pure: they take the catalog slices and the current search
//! state and return the rows that should be rendered, in catalog order.

use std::collections::BTreeSet;

use crate::catalog::{Bucket, FileEntry};

/// Case-insensitive substring match. An empty term matches everything.
pub fn matches_search(name: &str, term: &str) -> bool {
  if term.is_empty() {
    return true;
  }
  name.to_lowercase().contains(&term.to_lowercase())
}

/// True when no tags are selected or the file carries at least one of them.
pub fn matches_tags(file: &FileEntry, selected: &BTreeSet<String>) -> bool {
  selected.is_empty() || file.tags.iter().any(|t| selected.contains(t))
}

pub fn filter_buckets<'a>(buckets: &'a [Bucket], term: &str) -> Vec<&'a Bucket> {
  buckets
    .iter()
    .filter(|b| matches_search(&b.name, term))
    .collect()
}

pub fn filter_files<'a>(
  files: &'a [FileEntry],
  bucket: &str,
  term: &str,
  selected: &BTreeSet<String>,
) -> Vec<&'a FileEntry> {
  files
    .iter()
    .filter(|f| f.is_visible_in(bucket))
    .filter(|f| matches_search(&f.name, term) && matches_tags(f, selected))
    .collect()
}
