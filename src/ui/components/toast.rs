//! Toast notification component

use gloo_timers::callback::Timeout;
use leptos::*;

use super::Icon;
use crate::ui::state::AppState;

const TOAST_TTL_MS: u32 = 5000;

#[component]
pub fn ToastContainer() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let toasts = state.toasts;

  view! {
    <div class="toast-container">
      <For
        each=move || toasts.get()
        key=|t| t.id
        children=move |toast| {
          let id = toast.id;

          // Auto-remove, kept alive past the component's drop
          Timeout::new(TOAST_TTL_MS, move || state.remove_toast(id)).forget();

          view! {
            <div class="toast warning">
              <Icon name="alert-triangle" size=18/>
              <span class="toast-message">{toast.message.clone()}</span>
              <button class="toast-close" on:click=move |_| state.remove_toast(id)>
                <Icon name="x" size=16/>
              </button>
            </div>
          }
        }
      />
    </div>
  }
}
