//! Inline SVG icons (lucide outlines)

use leptos::*;

fn icon_paths(name: &str) -> &'static [&'static str] {
  match name {
    "folder-open" => &[
      "m6 14 1.5-2.9A2 2 0 0 1 9.24 10H20a2 2 0 0 1 1.94 2.5l-1.54 6a2 2 0 0 1-1.95 1.5H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.9a2 2 0 0 1 1.69.9l.81 1.2a2 2 0 0 0 1.67.9H18a2 2 0 0 1 2 2v2",
    ],
    "plus" => &["M5 12h14", "M12 5v14"],
    "arrow-left" => &["m12 19-7-7 7-7", "M19 12H5"],
    "upload" => &[
      "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
      "M17 8l-5-5-5 5",
      "M12 3v12",
    ],
    "download" => &[
      "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
      "M7 10l5 5 5-5",
      "M12 15V3",
    ],
    "tag" => &[
      "M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z",
      "M7.5 7.5h.01",
    ],
    "trash-2" => &[
      "M3 6h18",
      "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6",
      "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2",
      "M10 11v6",
      "M14 11v6",
    ],
    "eye" => &[
      "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
      "M12 9a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
    ],
    "x" => &["M18 6 6 18", "m6 6 12 12"],
    "search" => &["M11 3a8 8 0 1 0 0 16 8 8 0 1 0 0-16z", "m21 21-4.3-4.3"],
    "alert-triangle" => &[
      "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3z",
      "M12 9v4",
      "M12 17h.01",
    ],
    _ => &[
      "M14.5 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7.5L14.5 2z",
      "M14 2v6h6",
    ],
  }
}

#[component]
pub fn Icon(name: &'static str, #[prop(default = 16)] size: u32) -> impl IntoView {
  view! {
    <svg
      class="icon"
      width=size
      height=size
      viewBox="0 0 24 24"
      fill="none"
      stroke="currentColor"
      stroke-width="2"
      stroke-linecap="round"
      stroke-linejoin="round"
    >
      {icon_paths(name)
        .iter()
        .map(|d| view! { <path d=*d></path> })
        .collect_view()}
    </svg>
  }
}
