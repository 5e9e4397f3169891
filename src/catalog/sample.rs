//! Built-in demo catalog, used when no catalog is configured

use chrono::NaiveDate;

use super::{AccessLevel, Bucket, Catalog, FileEntry};

const UNSPLASH: &str = "https://images.unsplash.com";

fn bucket(name: &str, (y, m, d): (i32, u32, u32), access: AccessLevel) -> Bucket {
  Bucket {
    name: name.into(),
    created: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    access,
    usage: "N/A".into(),
    objects: "N/A".into(),
  }
}

fn file(name: &str, size_kb: u64, tags: &[&str], photo: &str) -> FileEntry {
  FileEntry {
    name: name.into(),
    size_kb,
    tags: tags.iter().map(|t| t.to_string()).collect(),
    thumbnail_url: format!("{}/{}?w=50&h=50&fit=crop", UNSPLASH, photo),
    preview_url: format!("{}/{}", UNSPLASH, photo),
    bucket: None,
  }
}

impl Catalog {
  pub fn sample() -> Self {
    Self::new(
      vec![
        bucket("Marketing Assets", (2024, 3, 15), AccessLevel::ReadWrite),
        bucket("Customer Data", (2024, 3, 14), AccessLevel::ReadOnly),
        bucket("Operations", (2024, 3, 13), AccessLevel::ReadWrite),
      ],
      vec![
        file(
          "product-catalog.pdf",
          2048,
          &["documents", "marketing"],
          "photo-1568695269648-58d6a4b61c13",
        ),
        file(
          "marketing-banner.jpg",
          1024,
          &["images", "marketing"],
          "photo-1557821552-17105176677c",
        ),
        file(
          "quarterly-report.xlsx",
          512,
          &["reports", "archive"],
          "photo-1664575198308-3959904fa430",
        ),
      ],
    )
  }
}
