//! リセット・エクスポート・インポートのボタン

use convidados_common::ACCEPTED_EXTENSIONS;
use leptos::prelude::*;
use web_sys::{Event, File, HtmlInputElement};

#[component]
pub fn Toolbar<FR, FE, FI>(
    on_reset: FR,
    on_export: FE,
    on_import: FI,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
    FE: Fn(()) + 'static + Clone,
    FI: Fn(File) + 'static + Clone,
{
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // 同じファイルを続けて選べるようにする
        input.set_value("");
        if let Some(file) = file {
            on_import(file);
        }
    };

    view! {
        <div class="toolbar">
            <button
                class="btn btn-danger"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "Reset List"
            </button>

            <button
                class="btn btn-primary"
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                "Export"
            </button>

            <label class="btn btn-success">
                "Import"
                <input
                    type="file"
                    class="hidden"
                    accept=ACCEPTED_EXTENSIONS
                    on:change=on_change
                />
            </label>
        </div>
    }
}
