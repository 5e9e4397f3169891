//! Parent-owned browsing state and the events that mutate it

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Bucket, Catalog, FileEntry};
use crate::filter;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
  /// "View Files" on a bucket row
  SelectBucket(String),
  /// Navigate from the file list back to the bucket list
  Back,
  Search(String),
  ToggleTag(String),
  ClearTags,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
  pub selected_bucket: Option<String>,
  pub search_term: String,
  pub selected_tags: BTreeSet<String>,
}

impl Selection {
  pub fn new() -> Self {
    Self::default()
  }

  /// Applies `event` and returns whether anything changed.
  pub fn apply(&mut self, catalog: &Catalog, event: SelectionEvent) -> bool {
    tracing::debug!(?event, "selection event");
    match event {
      SelectionEvent::SelectBucket(name) => {
        if catalog.bucket(&name).is_none() {
          tracing::warn!(bucket = %name, "ignoring selection of unknown bucket");
          return false;
        }
        if self.selected_bucket.as_deref() == Some(name.as_str()) {
          return false;
        }
        self.selected_bucket = Some(name);
        true
      }
      SelectionEvent::Back => self.selected_bucket.take().is_some(),
      SelectionEvent::Search(term) => {
        if self.search_term == term {
          return false;
        }
        self.search_term = term;
        true
      }
      SelectionEvent::ToggleTag(tag) => {
        if !self.selected_tags.remove(&tag) {
          self.selected_tags.insert(tag);
        }
        true
      }
      SelectionEvent::ClearTags => {
        let changed = !self.selected_tags.is_empty();
        self.selected_tags.clear();
        changed
      }
    }
  }

  pub fn is_tag_selected(&self, tag: &str) -> bool {
    self.selected_tags.contains(tag)
  }

  pub fn visible_buckets<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Bucket> {
    filter::filter_buckets(&catalog.buckets, &self.search_term)
  }

  /// Files for the selected bucket, empty when no bucket is selected
  pub fn visible_files<'a>(&self, catalog: &'a Catalog) -> Vec<&'a FileEntry> {
    match &self.selected_bucket {
      Some(bucket) => filter::filter_files(
        &catalog.files,
        bucket,
        &self.search_term,
        &self.selected_tags,
      ),
      None => Vec::new(),
    }
  }

  /// Tags that can be offered in the tag filter, sorted
  pub fn available_tags(catalog: &Catalog) -> Vec<String> {
    catalog.tags()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_toggle_tag_twice_restores() {
    let catalog = Catalog::sample();
    let mut selection = Selection::new();
    assert!(selection.apply(&catalog, SelectionEvent::ToggleTag("images".into())));
    assert!(selection.is_tag_selected("images"));
    assert!(selection.apply(&catalog, SelectionEvent::ToggleTag("images".into())));
    assert!(selection.selected_tags.is_empty());
  }

  #[test]
  fn test_back_without_bucket_is_noop() {
    let catalog = Catalog::sample();
    let mut selection = Selection::new();
    assert!(!selection.apply(&catalog, SelectionEvent::Back));
  }

  #[test]
  fn test_clear_tags_reports_change() {
    let catalog = Catalog::sample();
    let mut selection = Selection::new();
    assert!(!selection.apply(&catalog, SelectionEvent::ClearTags));
    selection.apply(&catalog, SelectionEvent::ToggleTag("reports".into()));
    assert!(selection.apply(&catalog, SelectionEvent::ClearTags));
  }
}
