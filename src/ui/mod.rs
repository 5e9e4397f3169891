//! Browser UI, client-side rendered with Leptos

pub mod apiclient;
pub mod components;
pub mod state;
