//! Search box and tag filter shared by both list views

use leptos::*;
use std::collections::BTreeSet;

use super::Icon;

#[component]
pub fn SearchBar(#[prop(into)] search_term: Signal<String>, on_search: Callback<String>) -> impl IntoView {
  view! {
    <div class="search-bar">
      <Icon name="search" size=16/>
      <input
        type="search"
        class="input"
        placeholder="Search buckets and files..."
        prop:value=move || search_term.get()
        on:input=move |ev| on_search.call(event_target_value(&ev))
      />
    </div>
  }
}

#[component]
pub fn TagFilter(
  #[prop(into)] tags: Signal<Vec<String>>,
  #[prop(into)] selected: Signal<BTreeSet<String>>,
  on_toggle: Callback<String>,
  on_clear: Callback<()>,
) -> impl IntoView {
  view! {
    <div class="tag-filter">
      <Icon name="tag" size=16/>
      <For
        each=move || tags.get()
        key=|t| t.clone()
        children=move |tag| {
          let tag_for_class = tag.clone();
          let tag_for_click = tag.clone();
          view! {
            <button
              class="tag-chip"
              class:active=move || selected.with(|s| s.contains(&tag_for_class))
              on:click=move |_| on_toggle.call(tag_for_click.clone())
            >
              {format!("#{}", tag)}
            </button>
          }
        }
      />
      <Show when=move || !selected.with(|s| s.is_empty())>
        <button class="btn btn-ghost btn-sm" on:click=move |_| on_clear.call(())>
          "Clear"
        </button>
      </Show>
    </div>
  }
}
