//! ブラウザ側のファイルダウンロード

use gloo::file::{Blob, ObjectUrl};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;

/// `bytes` を `file_name` としてダウンロードさせる
pub fn download_bytes(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), String> {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "anchor element expected".to_string())?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // ObjectUrl は drop 時に revoke されるので、クリック処理が終わるまで保持する
    Timeout::new(0, move || drop(url)).forget();
    Ok(())
}
