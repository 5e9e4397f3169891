//! UI components

use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::catalog::Catalog;
use crate::selection::{Selection, SelectionEvent};
use crate::ui::apiclient;
use crate::ui::state::AppState;

mod bucket_list;
mod file_list;
mod icons;
mod preview;
mod toast;
mod toolbar;

pub use bucket_list::BucketList;
pub use file_list::FileList;
pub use icons::Icon;
pub use preview::ImagePreview;
pub use toast::ToastContainer;
pub use toolbar::{SearchBar, TagFilter};

/// Main App component. Owns the selection and wires the list views to it.
#[component]
pub fn App() -> impl IntoView {
  provide_meta_context();

  let state = AppState::new();
  provide_context(state);

  // Load the catalog once; fall back to the built-in sample if the host has none
  spawn_local(async move {
    match apiclient::fetch_catalog().await {
      Ok(catalog) => state.catalog.set(catalog),
      Err(e) => {
        leptos::logging::warn!("Failed to load catalog: {}", e);
        state.catalog.set(Catalog::sample());
        state.show_warning("Catalog unavailable, showing sample data");
      }
    }
    state.catalog_loading.set(false);
  });

  let selection = state.selection;
  let catalog = state.catalog;

  // Memos so views only re-render when their own slice of the selection changes
  let search_term = create_memo(move |_| selection.with(|s| s.search_term.clone()));
  let selected_tags = create_memo(move |_| selection.with(|s| s.selected_tags.clone()));
  let selected_bucket = create_memo(move |_| selection.with(|s| s.selected_bucket.clone()));
  let bucket_name = Signal::derive(move || selected_bucket.get().unwrap_or_default());
  let buckets = Signal::derive(move || catalog.with(|c| c.buckets.clone()));
  let files = Signal::derive(move || catalog.with(|c| c.files.clone()));
  let all_tags = Signal::derive(move || catalog.with(Selection::available_tags));

  let on_select_bucket = Callback::new(move |name: String| state.dispatch(SelectionEvent::SelectBucket(name)));
  let on_back = Callback::new(move |_: ()| state.dispatch(SelectionEvent::Back));
  let on_search = Callback::new(move |term: String| state.dispatch(SelectionEvent::Search(term)));
  let on_toggle_tag = Callback::new(move |tag: String| state.dispatch(SelectionEvent::ToggleTag(tag)));
  let on_clear_tags = Callback::new(move |_: ()| state.dispatch(SelectionEvent::ClearTags));

  let title = move || match selected_bucket.get() {
    Some(bucket) => format!("{} - Bucket Browser", bucket),
    None => "Bucket Browser".to_string(),
  };

  view! {
    <Title text=title/>
    <div class="app-container">
      <header class="toolbar">
        <h1>"Bucket Browser"</h1>
        <SearchBar search_term=search_term on_search=on_search/>
        <TagFilter tags=all_tags selected=selected_tags on_toggle=on_toggle_tag on_clear=on_clear_tags/>
      </header>
      <main class="content">
        <Show
          when=move || !state.catalog_loading.get()
          fallback=|| view! {
            <div class="loading">
              <div class="loading-spinner"></div>
              " Loading..."
            </div>
          }
        >
          {move || match selected_bucket.get() {
            None => view! {
              <BucketList
                buckets=buckets
                on_select_bucket=on_select_bucket
                search_term=search_term
                selected_tags=selected_tags
              />
            }
            .into_view(),
            Some(_) => view! {
              <FileList
                files=files
                bucket_name=bucket_name
                on_back=on_back
                search_term=search_term
                selected_tags=selected_tags
              />
            }
            .into_view(),
          }}
        </Show>
      </main>
      <ToastContainer/>
    </div>
  }
}
