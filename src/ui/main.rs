//! Bucket browser UI - Client-Side Rendered (WASM)

use bucket_browser::ui::components::App;
use leptos::*;

fn main() {
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <App/> });
}
