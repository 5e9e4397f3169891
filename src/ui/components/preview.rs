//! Full-screen image preview overlay

use leptos::*;

use super::Icon;

#[component]
pub fn ImagePreview(#[prop(into)] src: String, on_close: Callback<()>) -> impl IntoView {
  let keydown = window_event_listener(ev::keydown, move |ev| {
    if ev.key() == "Escape" {
      on_close.call(());
    }
  });
  on_cleanup(move || keydown.remove());

  view! {
    <div class="preview-overlay" on:click=move |_| on_close.call(())>
      <button
        class="preview-close"
        title="Close"
        on:click=move |e| {
          e.stop_propagation();
          on_close.call(());
        }
      >
        <Icon name="x" size=24/>
      </button>
      <img
        class="preview-image"
        src=src
        alt="Preview"
        on:click=|e| e.stop_propagation()
      />
    </div>
  }
}
