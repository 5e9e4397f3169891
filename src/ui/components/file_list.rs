//! File table for one bucket with search and tag filtering

use leptos::*;
use std::collections::BTreeSet;

use super::{Icon, ImagePreview};
use crate::catalog::FileEntry;
use crate::filter;
use crate::preview::PreviewState;

#[component]
pub fn FileList(
  #[prop(into)] files: Signal<Vec<FileEntry>>,
  #[prop(into)] bucket_name: Signal<String>,
  on_back: Callback<()>,
  #[prop(into)] search_term: Signal<String>,
  #[prop(into)] selected_tags: Signal<BTreeSet<String>>,
) -> impl IntoView {
  let preview = create_rw_signal(PreviewState::Closed);

  let filtered = move || {
    let bucket = bucket_name.get();
    let term = search_term.get();
    selected_tags.with(|tags| {
      files.with(|all| {
        filter::filter_files(all, &bucket, &term, tags)
          .into_iter()
          .cloned()
          .collect::<Vec<_>>()
      })
    })
  };
  let is_empty = move || filtered().is_empty();

  let request_preview = move |file: &FileEntry| {
    preview.update(|p| {
      p.request(file);
    });
  };

  let close_preview = Callback::new(move |_: ()| preview.update(PreviewState::close));

  view! {
    <section class="page files">
      <div class="page-header">
        <div class="page-title">
          <button class="btn btn-secondary" on:click=move |_| on_back.call(())>
            <Icon name="arrow-left" size=16/>
            " Back"
          </button>
          <h2>{move || bucket_name.get()}</h2>
        </div>
        <div class="page-header-actions">
          <button class="btn btn-primary">
            <Icon name="upload" size=16/>
            " Upload File or Folder"
          </button>
          <button class="btn btn-secondary">
            <Icon name="trash-2" size=16/>
            " Delete Selected Files"
          </button>
        </div>
      </div>

      <div class="card">
        <table class="data-table">
          <thead>
            <tr>
              <th>"File"</th>
              <th>"Size (KB)"</th>
              <th>"Tags"</th>
              <th class="text-right">"Actions"</th>
            </tr>
          </thead>
          <tbody>
            <For
              each=filtered
              key=|f| f.name.clone()
              children=move |file| {
                let is_image = file.is_image();
                let thumb_file = file.clone();
                let view_file = file.clone();
                let tags = file.tags.clone();
                view! {
                  <tr>
                    <td>
                      <div class="file-cell">
                        <img
                          class="thumbnail"
                          class:clickable=is_image
                          src=file.thumbnail_url.clone()
                          alt=""
                          on:click=move |_| request_preview(&thumb_file)
                        />
                        <span class="file-name">{file.name.clone()}</span>
                      </div>
                    </td>
                    <td class="text-muted">{file.size_kb}</td>
                    <td>
                      <div class="tag-list">
                        {tags
                          .into_iter()
                          .map(|tag| view! { <span class="tag-chip">{format!("#{}", tag)}</span> })
                          .collect_view()}
                      </div>
                    </td>
                    <td class="actions text-right">
                      {is_image.then(|| view! {
                        <button
                          class="btn btn-ghost btn-sm"
                          title="View"
                          on:click=move |_| request_preview(&view_file)
                        >
                          <Icon name="eye" size=18/>
                        </button>
                      })}
                      <button class="btn btn-ghost btn-sm" title="Download">
                        <Icon name="download" size=18/>
                      </button>
                      <button class="btn btn-ghost btn-sm" title="Tag">
                        <Icon name="tag" size=18/>
                      </button>
                      <button class="btn btn-ghost btn-sm text-danger" title="Delete">
                        <Icon name="trash-2" size=18/>
                      </button>
                    </td>
                  </tr>
                }
              }
            />
          </tbody>
        </table>
        <Show when=is_empty>
          <div class="empty-state">
            <p>"No files match the current filters"</p>
          </div>
        </Show>
      </div>

      {move || {
        preview
          .with(|p| p.url().map(String::from))
          .map(|src| view! { <ImagePreview src=src on_close=close_preview/> })
      }}
    </section>
  }
}
