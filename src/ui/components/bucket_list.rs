//! Bucket table with search filtering

use leptos::*;
use std::collections::BTreeSet;

use super::Icon;
use crate::catalog::{AccessLevel, Bucket};
use crate::filter;

#[component]
pub fn BucketList(
  #[prop(into)] buckets: Signal<Vec<Bucket>>,
  on_select_bucket: Callback<String>,
  #[prop(into)] search_term: Signal<String>,
  /// Tag filters only narrow file listings; here they just produce a hint
  #[prop(into)]
  selected_tags: Signal<BTreeSet<String>>,
) -> impl IntoView {
  let filtered = move || {
    let term = search_term.get();
    buckets.with(|all| {
      filter::filter_buckets(all, &term)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>()
    })
  };
  let is_empty = move || filtered().is_empty();

  view! {
    <section class="page buckets">
      <div class="page-header">
        <h2>"Storage Buckets"</h2>
        <button class="btn btn-primary">
          <Icon name="plus" size=16/>
          " Create New Bucket"
        </button>
      </div>

      <Show when=move || !selected_tags.with(|t| t.is_empty())>
        <p class="text-muted filter-hint">
          {move || format!("{} tag filter(s) will apply inside a bucket", selected_tags.with(|t| t.len()))}
        </p>
      </Show>

      <div class="card">
        <table class="data-table">
          <thead>
            <tr>
              <th>"Bucket Name"</th>
              <th>"Created"</th>
              <th>"Access"</th>
              <th>"Usage"</th>
              <th>"Objects"</th>
              <th class="text-right">"Actions"</th>
            </tr>
          </thead>
          <tbody>
            <For
              each=filtered
              key=|b| b.name.clone()
              children=move |bucket| {
                let name = bucket.name.clone();
                view! {
                  <tr>
                    <td>
                      <div class="bucket-name">
                        <Icon name="folder-open" size=20/>
                        <strong>{bucket.name.clone()}</strong>
                      </div>
                    </td>
                    <td class="text-muted">{bucket.created.to_string()}</td>
                    <td>
                      <span class=access_badge_class(bucket.access)>{bucket.access.label()}</span>
                    </td>
                    <td class="text-muted">{bucket.usage.clone()}</td>
                    <td class="text-muted">{bucket.objects.clone()}</td>
                    <td class="actions text-right">
                      <button
                        class="btn btn-ghost btn-sm"
                        on:click=move |_| on_select_bucket.call(name.clone())
                      >
                        "View Files"
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
            <p>"No buckets match your search"</p>
          </div>
        </Show>
      </div>
    </section>
  }
}

fn access_badge_class(access: AccessLevel) -> &'static str {
  match access {
    AccessLevel::ReadWrite => "badge badge-success",
    AccessLevel::ReadOnly => "badge badge-warning",
  }
}
