//! Catalog fetch from the serving host

use gloo_net::http::Request;

use crate::catalog::Catalog;

const CATALOG_URL: &str = "/api/catalog";

pub async fn fetch_catalog() -> Result<Catalog, String> {
  let resp = Request::get(CATALOG_URL)
    .send()
    .await
    .map_err(|e| e.to_string())?;
  if !resp.ok() {
    return Err(format!("HTTP error: {}", resp.status()));
  }
  let catalog: Catalog = resp.json().await.map_err(|e| e.to_string())?;
  catalog.validate().map_err(|e| e.to_string())?;
  Ok(catalog)
}
