//! 確認チェックボックス付きの招待客リスト

use convidados_common::{Guest, NO_MATCH_PLACEHOLDER};
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn GuestList<F>(guests: Memo<Vec<Guest>>, on_toggle: F) -> impl IntoView
where
    F: Fn(Value) + 'static + Clone + Send + Sync,
{
    view! {
        <ul class="guest-list">
            <Show
                when=move || guests.with(|g| !g.is_empty())
                fallback=|| view! { <li class="empty">{NO_MATCH_PLACEHOLDER}</li> }
            >
                {
                    let on_toggle = on_toggle.clone();
                    move || {
                        guests
                            .get()
                            .into_iter()
                            .map(|guest| view! { <GuestRow guest=guest on_toggle=on_toggle.clone() /> })
                            .collect_view()
                    }
                }
            </Show>
        </ul>
    }
}

#[component]
fn GuestRow<F>(guest: Guest, on_toggle: F) -> impl IntoView
where
    F: Fn(Value) + 'static + Clone + Send + Sync,
{
    // JSONから取り込んだ要素はIDが無いことがある。その場合は切り替え不可
    let id = guest.id().cloned();
    let has_id = id.is_some();

    view! {
        <li class="guest-row">
            <div>
                <div class="guest-name">{guest.name_or_empty().to_string()}</div>
                <div class="guest-rg">{format!("RG: {}", guest.identifier_text())}</div>
            </div>
            <input
                type="checkbox"
                class="guest-check"
                prop:checked=guest.is_confirmed()
                disabled=!has_id
                on:change=move |_| {
                    if let Some(id) = id.clone() {
                        on_toggle(id);
                    }
                }
            />
        </li>
    }
}
