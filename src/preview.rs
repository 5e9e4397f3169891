//! Image preview overlay state

use serde::{Deserialize, Serialize};

use crate::catalog::FileEntry;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Substring after the last `.`, or `None` when the name has no dot.
pub fn file_extension(name: &str) -> Option<&str> {
  name.rsplit_once('.').map(|(_, ext)| ext)
}

pub fn is_image_file(name: &str) -> bool {
  file_extension(name).is_some_and(|ext| {
    IMAGE_EXTENSIONS
      .iter()
      .any(|known| ext.eq_ignore_ascii_case(known))
  })
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewState {
  #[default]
  Closed,
  Open {
    url: String,
  },
}

impl PreviewState {
  pub fn is_open(&self) -> bool {
    matches!(self, PreviewState::Open { .. })
  }

  pub fn url(&self) -> Option<&str> {
    match self {
      PreviewState::Open { url } => Some(url),
      PreviewState::Closed => None,
    }
  }

  /// Opens the overlay for `file` if it is an image. Returns whether it opened;
  /// non-image files leave the state untouched.
  pub fn request(&mut self, file: &FileEntry) -> bool {
    match file.preview_target() {
      Some(url) => {
        tracing::debug!(file = %file.name, "opening preview");
        *self = PreviewState::Open {
          url: url.to_string(),
        };
        true
      }
      None => {
        tracing::debug!(file = %file.name, "preview not available");
        false
      }
    }
  }

  pub fn close(&mut self) {
    *self = PreviewState::Closed;
  }
}
