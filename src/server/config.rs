use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::{Catalog, CatalogError};

pub const CONFIG_FILES: [&str; 2] = ["bucket-browser.yaml", "bucket-browser.yml"];

/// Replace `${VAR}` and `$VAR` references with environment values.
///
/// Expansion covers the whole file, catalog entries included. Write `$$` for a
/// literal `$` followed by a name. Unset variables expand to an empty string;
/// a `${` without a closing brace is left as is.
pub fn expand_env_vars(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  let mut rest = input;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    if let Some(escaped) = after.strip_prefix('$') {
      out.push('$');
      rest = escaped;
      continue;
    }

    if let Some(braced) = after.strip_prefix('{') {
      match braced.find('}') {
        Some(end) => {
          out.push_str(&std::env::var(&braced[..end]).unwrap_or_default());
          rest = &braced[end + 1..];
        }
        None => {
          out.push_str(&rest[pos..]);
          rest = "";
        }
      }
      continue;
    }

    let name_len = after
      .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
      .unwrap_or(after.len());
    if name_len == 0 {
      out.push('$');
    } else {
      out.push_str(&std::env::var(&after[..name_len]).unwrap_or_default());
    }
    rest = &after[name_len..];
  }

  out.push_str(rest);
  out
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub logging: LoggingSection,
  /// Buckets and files to browse. Defaults to the built-in sample catalog.
  #[serde(default = "Catalog::sample")]
  pub catalog: Catalog,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      server: ServerSection::default(),
      logging: LoggingSection::default(),
      catalog: Catalog::sample(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  /// Directory holding the built UI bundle (index.html + wasm)
  #[serde(default = "default_dist_dir")]
  pub dist_dir: String,
  /// Use ["*"] for permissive mode, or list origins like ["http://localhost:3000"]
  #[serde(default = "default_cors_origins")]
  pub cors_origins: Vec<String>,
}

fn default_host() -> String {
  "127.0.0.1".into()
}

fn default_port() -> u16 {
  8080
}

fn default_dist_dir() -> String {
  "dist".into()
}

fn default_cors_origins() -> Vec<String> {
  vec!["*".to_string()]
}

impl Default for ServerSection {
  fn default() -> Self {
    Self {
      host: default_host(),
      port: default_port(),
      dist_dir: default_dist_dir(),
      cors_origins: default_cors_origins(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}

fn default_level() -> String {
  "info".into()
}

impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl ServerConfig {
  pub fn from_yaml(content: &str) -> Result<Self, anyhow::Error> {
    let expanded = expand_env_vars(content);
    Ok(serde_yaml::from_str(&expanded)?)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
    let content = std::fs::read_to_string(&path)?;
    Self::from_yaml(&content)
  }

  pub fn find_and_load() -> Result<Option<Self>, anyhow::Error> {
    Self::find_and_load_in(Path::new("."))
  }

  pub fn find_and_load_in(dir: &Path) -> Result<Option<Self>, anyhow::Error> {
    for name in CONFIG_FILES {
      let path = dir.join(name);
      if path.exists() {
        tracing::info!("Loading config from {}", path.display());
        return Ok(Some(Self::from_file(path)?));
      }
    }
    Ok(None)
  }

  pub fn validate(&self) -> Result<(), CatalogError> {
    self.catalog.validate()
  }

  pub fn address(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}
