//! `FileReader` による非同期ファイル読み込み
//!
//! 呼び出しごとに別の reader を使い、キャンセルはしない。読み込みが重なった
//! 場合は最後に完了したものが勝つ。

use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};

pub fn read_bytes<F, E>(file: &File, on_loaded: F, on_error: E) -> Result<(), String>
where
    F: FnOnce(Vec<u8>) + 'static,
    E: FnOnce(String) + 'static,
{
    let reader = FileReader::new().map_err(|e| format!("{:?}", e))?;

    let reader_clone = reader.clone();
    let mut on_loaded = Some(on_loaded);
    let onload = Closure::wrap(Box::new(move |_: ProgressEvent| {
        let Ok(result) = reader_clone.result() else {
            return;
        };
        let bytes = js_sys::Uint8Array::new(&result).to_vec();
        if let Some(callback) = on_loaded.take() {
            callback(bytes);
        }
    }) as Box<dyn FnMut(_)>);

    let file_name = file.name();
    let mut on_error = Some(on_error);
    let onerror = Closure::wrap(Box::new(move |_: ProgressEvent| {
        if let Some(callback) = on_error.take() {
            callback(format!("could not read {}", file_name));
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    reader
        .read_as_array_buffer(file)
        .map_err(|e| format!("{:?}", e))
}
