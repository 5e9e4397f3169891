//! Configuration loading: defaults, YAML catalogs, env expansion, validation
#![cfg(feature = "server")]

use bucket_browser::catalog::{AccessLevel, Catalog, CatalogError};
use bucket_browser::server::ServerConfig;
use std::io::Write;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_default_config() {
  let config = ServerConfig::default();
  assert_eq!(config.server.host, "127.0.0.1");
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.server.dist_dir, "dist");
  assert_eq!(config.server.cors_origins, vec!["*"]);
  assert_eq!(config.logging.level, "info");
  assert_eq!(config.catalog, Catalog::sample());
  assert_eq!(config.address(), "127.0.0.1:8080");
}

#[test]
fn test_empty_yaml_uses_defaults() {
  let config = ServerConfig::from_yaml("{}").unwrap();
  assert_eq!(config.server.port, 8080);
  assert_eq!(config.catalog, Catalog::sample());
}

#[test]
fn test_partial_server_section() {
  let yaml = r#"
server:
  port: 9090
logging:
  level: debug
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  assert_eq!(config.server.port, 9090);
  assert_eq!(config.server.host, "127.0.0.1", "host should default");
  assert_eq!(config.logging.level, "debug");
}

// =============================================================================
// Catalog Sections
// =============================================================================

#[test]
fn test_catalog_from_yaml() {
  let yaml = r#"
catalog:
  buckets:
    - name: Media
      created: 2024-05-01
      access: Read Only
    - name: Backups
      created: 2024-05-02
      access: read-write
      usage: 1.2 GB
      objects: "42"
  files:
    - name: cover.PNG
      size: "300"
      tags: [images]
      thumbnail: https://cdn.example/cover-thumb.png
      preview: https://cdn.example/cover.png
    - name: dump.sql
      size: 90000
      bucket: Backups
      thumbnail: https://cdn.example/file.png
      preview: https://cdn.example/file.png
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  let catalog = &config.catalog;
  assert_eq!(catalog.buckets.len(), 2);

  let media = catalog.bucket("Media").unwrap();
  assert_eq!(media.access, AccessLevel::ReadOnly);
  assert_eq!(media.usage, "N/A");
  assert_eq!(media.objects, "N/A");

  let backups = catalog.bucket("Backups").unwrap();
  assert_eq!(backups.usage, "1.2 GB");
  assert_eq!(backups.objects, "42");

  let cover = catalog.file("cover.PNG").unwrap();
  assert_eq!(cover.size_kb, 300);
  assert!(cover.is_image());
  assert_eq!(cover.bucket, None);

  let dump = catalog.file("dump.sql").unwrap();
  assert_eq!(dump.bucket.as_deref(), Some("Backups"));
  assert!(dump.tags.is_empty());

  assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_date_rejected() {
  let yaml = r#"
catalog:
  buckets:
    - name: Media
      created: yesterday
"#;
  assert!(ServerConfig::from_yaml(yaml).is_err());
}

#[test]
fn test_duplicate_bucket_rejected() {
  let yaml = r#"
catalog:
  buckets:
    - name: Media
      created: 2024-05-01
    - name: Media
      created: 2024-05-02
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  assert_eq!(
    config.validate(),
    Err(CatalogError::DuplicateBucket("Media".to_string()))
  );
}

#[test]
fn test_unknown_scope_rejected() {
  let yaml = r#"
catalog:
  buckets:
    - name: Media
      created: 2024-05-01
  files:
    - name: a.txt
      size: 1
      bucket: Nowhere
      thumbnail: t
      preview: p
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  let err = config.validate().unwrap_err();
  assert!(matches!(err, CatalogError::UnknownBucketScope { .. }));
  assert!(err.to_string().contains("Nowhere"));
}

#[test]
fn test_duplicate_unscoped_file_rejected() {
  let mut catalog = Catalog::sample();
  let copy = catalog.files[0].clone();
  catalog.files.push(copy);
  assert_eq!(
    catalog.validate(),
    Err(CatalogError::DuplicateFile("product-catalog.pdf".to_string()))
  );
}

#[test]
fn test_scoped_file_shadowing_unscoped_rejected() {
  let yaml = r#"
catalog:
  buckets:
    - name: Ops
      created: 2024-05-01
  files:
    - name: x.jpg
      size: 1
      thumbnail: t
      preview: p
    - name: x.jpg
      size: 2
      bucket: Ops
      thumbnail: t
      preview: p
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  assert_eq!(
    config.validate(),
    Err(CatalogError::DuplicateFile("x.jpg".to_string()))
  );
}

#[test]
fn test_scoped_before_unscoped_rejected() {
  let yaml = r#"
catalog:
  buckets:
    - name: Ops
      created: 2024-05-01
  files:
    - name: x.jpg
      size: 2
      bucket: Ops
      thumbnail: t
      preview: p
    - name: x.jpg
      size: 1
      thumbnail: t
      preview: p
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  assert_eq!(
    config.validate(),
    Err(CatalogError::DuplicateFile("x.jpg".to_string()))
  );
}

#[test]
fn test_duplicate_tag_rejected() {
  let yaml = r#"
catalog:
  buckets:
    - name: Media
      created: 2024-05-01
  files:
    - name: a.png
      size: 1
      tags: [img, raw, img]
      thumbnail: t
      preview: p
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  let err = config.validate().unwrap_err();
  assert_eq!(
    err,
    CatalogError::DuplicateTag {
      file: "a.png".to_string(),
      tag: "img".to_string(),
    }
  );
  assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_empty_names_rejected() {
  let mut catalog = Catalog::sample();
  catalog.buckets[0].name = "  ".to_string();
  assert_eq!(catalog.validate(), Err(CatalogError::EmptyBucketName));

  let mut catalog = Catalog::sample();
  catalog.files[1].name.clear();
  assert_eq!(catalog.validate(), Err(CatalogError::EmptyFileName));
}

// =============================================================================
// Files and Environment
// =============================================================================

#[test]
fn test_env_expansion_in_file() {
  std::env::set_var("BB_CONFIG_TEST_CDN", "https://cdn.test");
  std::env::set_var("BB_CONFIG_TEST_PORT", "7070");

  let mut file = tempfile::NamedTempFile::new().unwrap();
  write!(
    file,
    r#"
server:
  port: $BB_CONFIG_TEST_PORT
catalog:
  buckets:
    - name: Media
      created: 2024-05-01
  files:
    - name: a.webp
      size: 5
      thumbnail: ${{BB_CONFIG_TEST_CDN}}/a-thumb.webp
      preview: ${{BB_CONFIG_TEST_CDN}}/a.webp
"#
  )
  .unwrap();

  let config = ServerConfig::from_file(file.path()).unwrap();
  assert_eq!(config.server.port, 7070);
  let a = config.catalog.file("a.webp").unwrap();
  assert_eq!(a.preview_target(), Some("https://cdn.test/a.webp"));
}

#[test]
fn test_escaped_dollar_in_catalog_kept() {
  std::env::set_var("BB_CONFIG_TEST_PRICE", "rewritten");
  let yaml = r#"
catalog:
  buckets:
    - name: Media
      created: 2024-05-01
  files:
    - name: $$BB_CONFIG_TEST_PRICE.png
      size: 1
      thumbnail: t
      preview: p
"#;
  let config = ServerConfig::from_yaml(yaml).unwrap();
  assert_eq!(config.catalog.files[0].name, "$BB_CONFIG_TEST_PRICE.png");
}

#[test]
fn test_find_and_load_in_directory() {
  let dir = tempfile::tempdir().unwrap();
  assert!(ServerConfig::find_and_load_in(dir.path()).unwrap().is_none());

  std::fs::write(
    dir.path().join("bucket-browser.yml"),
    "server:\n  port: 9999\n",
  )
  .unwrap();
  let config = ServerConfig::find_and_load_in(dir.path()).unwrap().unwrap();
  assert_eq!(config.server.port, 9999);
}

#[test]
fn test_missing_file_is_error() {
  assert!(ServerConfig::from_file("/definitely/not/here.yaml").is_err());
}
