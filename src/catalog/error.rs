use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
  #[error("bucket name must not be empty")]
  EmptyBucketName,
  #[error("file name must not be empty")]
  EmptyFileName,
  #[error("duplicate bucket '{0}'")]
  DuplicateBucket(String),
  #[error("duplicate file '{0}'")]
  DuplicateFile(String),
  #[error("file '{file}' lists tag '{tag}' more than once")]
  DuplicateTag { file: String, tag: String },
  #[error("file '{file}' is scoped to unknown bucket '{bucket}'")]
  UnknownBucketScope { file: String, bucket: String },
}
