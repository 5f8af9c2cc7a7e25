//! 浏览器下载
//!
//! 把内存中的字节包装成 Blob，通过临时 `<a download>` 触发保存。

use super::object_url::PreviewUrl;
use factfusion_shared::error::ExportError;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement};

pub const MIME_JSON: &str = "application/json";
pub const MIME_PDF: &str = "application/pdf";

/// 点击后延迟释放 URL，部分浏览器在 click 返回后才开始读取
const REVOKE_DELAY_MS: u32 = 100;

fn js_err(e: wasm_bindgen::JsValue) -> ExportError {
    ExportError::Download(format!("{e:?}"))
}

fn make_blob(bytes: &[u8], mime: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)
}

/// 以 `file_name` 保存字节内容
pub fn download_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), ExportError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Download("no body".into()))?;

    let blob = make_blob(bytes, mime)?;
    let url = PreviewUrl::new(&blob).ok_or_else(|| ExportError::Download("object url".into()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ExportError::Download("anchor element".into()))?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    anchor.remove();

    Timeout::new(REVOKE_DELAY_MS, move || drop(url)).forget();
    tracing::info!(file_name, bytes = bytes.len(), "download started");
    Ok(())
}

/// 保存文本内容（JSON 报告）
pub fn download_text(file_name: &str, mime: &str, text: &str) -> Result<(), ExportError> {
    download_bytes(file_name, mime, text.as_bytes())
}
