//! Global UI state using Leptos signals

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::selection::{Selection, SelectionEvent};

/// Warning toast, dismissed by the user or after a timeout
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Toast {
  pub id: u32,
  pub message: String,
}

/// Application state shared through context. The parent view owns the
/// selection; child views only receive derived signals and callbacks.
#[derive(Clone, Copy)]
pub struct AppState {
  pub catalog: RwSignal<Catalog>,
  pub selection: RwSignal<Selection>,
  pub catalog_loading: RwSignal<bool>,
  pub toasts: RwSignal<Vec<Toast>>,
  pub toast_counter: RwSignal<u32>,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      catalog: create_rw_signal(Catalog::default()),
      selection: create_rw_signal(Selection::new()),
      catalog_loading: create_rw_signal(true),
      toasts: create_rw_signal(Vec::new()),
      toast_counter: create_rw_signal(0),
    }
  }

  pub fn dispatch(&self, event: SelectionEvent) {
    let mut next = self.selection.get_untracked();
    if self.catalog.with_untracked(|c| next.apply(c, event)) {
      self.selection.set(next);
    }
  }

  pub fn show_warning(&self, message: &str) {
    let id = self.toast_counter.get_untracked() + 1;
    self.toast_counter.set(id);
    self.toasts.update(|toasts| {
      toasts.push(Toast {
        id,
        message: message.to_string(),
      });
    });
  }

  pub fn remove_toast(&self, id: u32) {
    self.toasts.update(|toasts| {
      toasts.retain(|t| t.id != id);
    });
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_warnings_get_distinct_ids_and_dismiss() {
    let runtime = create_runtime();
    let state = AppState::new();

    state.show_warning("Catalog unavailable");
    state.show_warning("Catalog unavailable");
    let ids: Vec<u32> = state.toasts.with_untracked(|t| t.iter().map(|t| t.id).collect());
    assert_eq!(ids, vec![1, 2]);

    state.remove_toast(1);
    let ids: Vec<u32> = state.toasts.with_untracked(|t| t.iter().map(|t| t.id).collect());
    assert_eq!(ids, vec![2]);

    runtime.dispose();
  }

  #[test]
  fn test_dispatch_skips_unchanged_selection() {
    let runtime = create_runtime();
    let state = AppState::new();
    state.catalog.set(Catalog::sample());

    state.dispatch(SelectionEvent::SelectBucket("Operations".into()));
    assert_eq!(
      state.selection.with_untracked(|s| s.selected_bucket.clone()),
      Some("Operations".to_string())
    );
    state.dispatch(SelectionEvent::SelectBucket("Nowhere".into()));
    assert_eq!(
      state.selection.with_untracked(|s| s.selected_bucket.clone()),
      Some("Operations".to_string())
    );

    runtime.dispose();
  }
}
