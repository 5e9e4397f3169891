use bucket_browser::catalog::{AccessLevel, Bucket, Catalog, FileEntry};
use bucket_browser::filter;
use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::collections::BTreeSet;

#[derive(Parser)]
#[command(name = "bucket-browser", about = "Mock object-storage browser", version)]
pub struct Args {
  /// Config file (defaults to bucket-browser.yaml in the working directory)
  #[arg(short, long, env = "BUCKET_BROWSER_CONFIG")]
  pub config: Option<String>,
  #[arg(long, env = "BUCKET_BROWSER_LOG_LEVEL")]
  pub log_level: Option<String>,
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
  #[default]
  Table,
  Json,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Serve the browser UI and catalog API
  Serve {
    #[arg(long)]
    host: Option<String>,
    #[arg(short, long)]
    port: Option<u16>,
    /// Directory with the built UI bundle
    #[arg(long)]
    dist: Option<String>,
  },
  /// List buckets matching a search term
  Buckets {
    #[arg(short, long, default_value = "")]
    search: String,
    #[arg(long, default_value = "table")]
    format: OutputFormat,
  },
  /// List files of a bucket, filtered by search term and tags
  Files {
    #[arg(short, long)]
    bucket: String,
    #[arg(short, long, default_value = "")]
    search: String,
    /// Repeat to select several tags; a file matches if it has any of them
    #[arg(short, long = "tag")]
    tags: Vec<String>,
    #[arg(long, default_value = "table")]
    format: OutputFormat,
  },
  /// Validate the catalog and print a summary
  Check,
}

pub fn run_buckets(catalog: &Catalog, search: &str, format: OutputFormat) -> Result<(), anyhow::Error> {
  let buckets = filter::filter_buckets(&catalog.buckets, search);
  match format {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&buckets)?),
    OutputFormat::Table => println!("{}", bucket_table(&buckets)),
  }
  Ok(())
}

pub fn run_files(
  catalog: &Catalog,
  bucket: &str,
  search: &str,
  tags: &[String],
  format: OutputFormat,
) -> Result<(), anyhow::Error> {
  if catalog.bucket(bucket).is_none() {
    anyhow::bail!("bucket '{}' not found", bucket);
  }
  let selected: BTreeSet<String> = tags.iter().cloned().collect();
  let files = filter::filter_files(&catalog.files, bucket, search, &selected);
  match format {
    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&files)?),
    OutputFormat::Table => {
      println!("{}", bucket.bold());
      println!("{}", file_table(&files));
    }
  }
  Ok(())
}

pub fn run_check(catalog: &Catalog) -> Result<(), anyhow::Error> {
  catalog.validate()?;
  let images = catalog.files.iter().filter(|f| f.is_image()).count();
  println!(
    "{} {} buckets, {} files ({} previewable), {} tags",
    "ok".green().bold(),
    catalog.buckets.len(),
    catalog.files.len(),
    images,
    catalog.tags().len()
  );
  Ok(())
}

fn access_cell(access: AccessLevel) -> String {
  match access {
    AccessLevel::ReadWrite => access.label().green().to_string(),
    AccessLevel::ReadOnly => access.label().yellow().to_string(),
  }
}

pub fn bucket_table(buckets: &[&Bucket]) -> Table {
  let mut table = Table::new();
  table
    .load_preset(UTF8_FULL)
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_header(vec!["Bucket Name", "Created", "Access", "Usage", "Objects"]);
  for b in buckets {
    table.add_row(vec![
      b.name.clone(),
      b.created.to_string(),
      access_cell(b.access),
      b.usage.clone(),
      b.objects.clone(),
    ]);
  }
  table
}

pub fn file_table(files: &[&FileEntry]) -> Table {
  let mut table = Table::new();
  table
    .load_preset(UTF8_FULL)
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_header(vec!["File", "Size (KB)", "Tags", "Preview"]);
  for f in files {
    let tags: Vec<String> = f.tags.iter().map(|t| format!("#{}", t)).collect();
    table.add_row(vec![
      f.name.clone(),
      f.size_kb.to_string(),
      tags.join(" "),
      f.preview_target().unwrap_or("-").to_string(),
    ]);
  }
  table
}
