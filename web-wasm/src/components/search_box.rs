//! 名前検索の入力欄

use leptos::prelude::*;

#[component]
pub fn SearchBox<F>(search_term: Memo<String>, on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <input
            type="text"
            class="search"
            placeholder="Search name..."
            prop:value=move || search_term.get()
            on:input=move |ev| on_search(event_target_value(&ev))
        />
    }
}
