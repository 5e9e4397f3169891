use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::CatalogError;

/// Bucket access level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
  #[serde(alias = "Read Only", alias = "readonly")]
  ReadOnly,
  #[default]
  #[serde(alias = "Read/Write", alias = "readwrite")]
  ReadWrite,
}

impl AccessLevel {
  pub fn label(&self) -> &'static str {
    match self {
      AccessLevel::ReadOnly => "Read Only",
      AccessLevel::ReadWrite => "Read/Write",
    }
  }

  pub fn is_writable(&self) -> bool {
    matches!(self, AccessLevel::ReadWrite)
  }
}

impl fmt::Display for AccessLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// A named container of files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
  pub name: String,
  pub created: NaiveDate,
  #[serde(default)]
  pub access: AccessLevel,
  #[serde(default = "not_available")]
  pub usage: String,
  #[serde(default = "not_available")]
  pub objects: String,
}

fn not_available() -> String {
  "N/A".into()
}

/// A file listed inside a bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
  pub name: String,
  /// Size in kilobytes
  #[serde(rename = "size", deserialize_with = "size_from_number_or_string")]
  pub size_kb: u64,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(rename = "thumbnail")]
  pub thumbnail_url: String,
  #[serde(rename = "preview")]
  pub preview_url: String,
  /// Restricts the file to one bucket. Unscoped files show up in every bucket.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bucket: Option<String>,
}

impl FileEntry {
  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.iter().any(|t| t == tag)
  }

  pub fn is_visible_in(&self, bucket: &str) -> bool {
    self.bucket.as_deref().map_or(true, |scope| scope == bucket)
  }

  pub fn is_image(&self) -> bool {
    crate::preview::is_image_file(&self.name)
  }

  /// URL to open in the preview overlay, only for image files
  pub fn preview_target(&self) -> Option<&str> {
    self.is_image().then_some(self.preview_url.as_str())
  }
}

fn size_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Size {
    Number(u64),
    Text(String),
  }

  match Size::deserialize(deserializer)? {
    Size::Number(n) => Ok(n),
    Size::Text(s) => s
      .trim()
      .parse()
      .map_err(|_| serde::de::Error::custom(format!("invalid size '{}'", s))),
  }
}

/// The static set of buckets and files the browser shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
  #[serde(default)]
  pub buckets: Vec<Bucket>,
  #[serde(default)]
  pub files: Vec<FileEntry>,
}

impl Catalog {
  pub fn new(buckets: Vec<Bucket>, files: Vec<FileEntry>) -> Self {
    Self { buckets, files }
  }

  pub fn bucket(&self, name: &str) -> Option<&Bucket> {
    self.buckets.iter().find(|b| b.name == name)
  }

  /// First file with this name in any scope. Use `files_in` to resolve a
  /// name inside one bucket.
  pub fn file(&self, name: &str) -> Option<&FileEntry> {
    self.files.iter().find(|f| f.name == name)
  }

  /// Files visible inside `bucket`, before any search or tag filtering
  pub fn files_in<'a>(&'a self, bucket: &'a str) -> impl Iterator<Item = &'a FileEntry> + 'a {
    self.files.iter().filter(move |f| f.is_visible_in(bucket))
  }

  /// All distinct tags, sorted
  pub fn tags(&self) -> Vec<String> {
    let mut tags: Vec<String> = self
      .files
      .iter()
      .flat_map(|f| f.tags.iter().cloned())
      .collect::<HashSet<_>>()
      .into_iter()
      .collect();
    tags.sort();
    tags
  }

  pub fn validate(&self) -> Result<(), CatalogError> {
    let mut bucket_names = HashSet::new();
    for bucket in &self.buckets {
      if bucket.name.trim().is_empty() {
        return Err(CatalogError::EmptyBucketName);
      }
      if !bucket_names.insert(bucket.name.as_str()) {
        return Err(CatalogError::DuplicateBucket(bucket.name.clone()));
      }
    }

    // Unscoped files show in every bucket, so their names collide with
    // any scoped file of the same name.
    let unscoped: HashSet<&str> = self
      .files
      .iter()
      .filter(|f| f.bucket.is_none())
      .map(|f| f.name.as_str())
      .collect();

    let mut file_keys = HashSet::new();
    for file in &self.files {
      if file.name.trim().is_empty() {
        return Err(CatalogError::EmptyFileName);
      }
      if let Some(scope) = &file.bucket {
        if !bucket_names.contains(scope.as_str()) {
          return Err(CatalogError::UnknownBucketScope {
            file: file.name.clone(),
            bucket: scope.clone(),
          });
        }
        if unscoped.contains(file.name.as_str()) {
          return Err(CatalogError::DuplicateFile(file.name.clone()));
        }
      }
      if !file_keys.insert((file.bucket.as_deref(), file.name.as_str())) {
        return Err(CatalogError::DuplicateFile(file.name.clone()));
      }

      let mut seen_tags = HashSet::new();
      if let Some(tag) = file.tags.iter().find(|t| !seen_tags.insert(t.as_str())) {
        return Err(CatalogError::DuplicateTag {
          file: file.name.clone(),
          tag: tag.clone(),
        });
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn file(name: &str, bucket: Option<&str>) -> FileEntry {
    FileEntry {
      name: name.into(),
      size_kb: 1,
      tags: vec![],
      thumbnail_url: String::new(),
      preview_url: String::new(),
      bucket: bucket.map(String::from),
    }
  }

  #[test]
  fn test_access_level_labels() {
    assert_eq!(AccessLevel::ReadOnly.to_string(), "Read Only");
    assert_eq!(AccessLevel::ReadWrite.to_string(), "Read/Write");
    assert!(!AccessLevel::ReadOnly.is_writable());
  }

  #[test]
  fn test_access_level_accepts_display_labels() {
    let level: AccessLevel = serde_json::from_str(r#""Read Only""#).unwrap();
    assert_eq!(level, AccessLevel::ReadOnly);
    let level: AccessLevel = serde_json::from_str(r#""read-write""#).unwrap();
    assert_eq!(level, AccessLevel::ReadWrite);
  }

  #[test]
  fn test_size_accepts_numeric_string() {
    let json = r#"{"name":"a.txt","size":"2048","thumbnail":"t","preview":"p"}"#;
    let file: FileEntry = serde_json::from_str(json).unwrap();
    assert_eq!(file.size_kb, 2048);

    let json = r#"{"name":"a.txt","size":12,"thumbnail":"t","preview":"p"}"#;
    let file: FileEntry = serde_json::from_str(json).unwrap();
    assert_eq!(file.size_kb, 12);
  }

  #[test]
  fn test_size_rejects_garbage() {
    let json = r#"{"name":"a.txt","size":"big","thumbnail":"t","preview":"p"}"#;
    assert!(serde_json::from_str::<FileEntry>(json).is_err());
  }

  #[test]
  fn test_unscoped_file_visible_everywhere() {
    let f = file("a.txt", None);
    assert!(f.is_visible_in("Operations"));
    assert!(f.is_visible_in("anything"));

    let scoped = file("b.txt", Some("Operations"));
    assert!(scoped.is_visible_in("Operations"));
    assert!(!scoped.is_visible_in("Customer Data"));
  }

  #[test]
  fn test_same_name_allowed_in_different_scopes() {
    let bucket = |name: &str| Bucket {
      name: name.into(),
      created: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
      access: AccessLevel::ReadWrite,
      usage: not_available(),
      objects: not_available(),
    };
    let catalog = Catalog::new(
      vec![bucket("a"), bucket("b")],
      vec![file("x.txt", Some("a")), file("x.txt", Some("b"))],
    );
    assert!(catalog.validate().is_ok());
  }
}
