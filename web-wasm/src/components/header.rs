//! ページヘッダー

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Guest List"</h1>
        </header>
    }
}
