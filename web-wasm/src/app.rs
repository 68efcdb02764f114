//! メインアプリケーションコンポーネント

use crate::components::{
    guest_list::GuestList,
    header::Header,
    search_box::SearchBox,
    toolbar::Toolbar,
};
use crate::download::download_bytes;
use crate::file_reader::read_bytes;
use crate::storage::BrowserStore;
use convidados_common::{Guest, GuestRoster, EXPORT_FILE_NAME, XLSX_MIME_TYPE};
use gloo::dialogs::alert;
use leptos::prelude::*;
use serde_json::Value;
use web_sys::File;

#[component]
pub fn App() -> impl IntoView {
    // データは名簿が持ち、シグナルは描画用の写し
    let mut roster = GuestRoster::load(BrowserStore);
    let (state, set_state) = signal(roster.state().clone());
    roster.subscribe(move |s| set_state.set(s.clone()));
    let roster = StoredValue::new(roster);

    let visible = Memo::new(move |_| {
        state.with(|s| s.filtered().into_iter().cloned().collect::<Vec<Guest>>())
    });
    let search_term = Memo::new(move |_| state.with(|s| s.search_term.clone()));

    let on_toggle = move |id: Value| {
        roster.update_value(|r| r.toggle_confirmed(id));
    };

    let on_reset = move |_| {
        roster.update_value(|r| r.reset());
    };

    let on_export = move |_| {
        let exported = roster
            .with_value(|r| r.export_xlsx())
            .map_err(|e| e.to_string())
            .and_then(|bytes| download_bytes(&bytes, EXPORT_FILE_NAME, XLSX_MIME_TYPE));
        if let Err(e) = exported {
            gloo::console::error!("export failed:", e.clone());
            alert(&e);
        }
    };

    let on_import = move |file: File| {
        let file_name = file.name();
        let loaded_name = file_name.clone();
        let started = read_bytes(
            &file,
            move |bytes| {
                let imported = roster.try_update_value(|r| r.import_file(&loaded_name, &bytes));
                match imported {
                    Some(Ok(())) => gloo::console::log!("imported", loaded_name),
                    Some(Err(e)) => alert(&e.to_string()),
                    None => {}
                }
            },
            |e| alert(&e),
        );
        if let Err(e) = started {
            gloo::console::error!("could not start reading", file_name, e);
        }
    };

    let on_search = move |text: String| {
        roster.update_value(|r| r.set_search_term(text));
    };

    view! {
        <div class="container">
            <Header />

            <Toolbar on_reset=on_reset on_export=on_export on_import=on_import />

            <SearchBox search_term=search_term on_search=on_search />

            <GuestList guests=visible on_toggle=on_toggle />
        </div>
    }
}
