//! DOM 栅格化桥接
//!
//! 调用页面上通过 `<script>` 引入的 html2canvas，把元素渲染成 JPEG。
//! 返回原始字节，PDF 组装在 Rust 侧完成。

use factfusion_shared::error::ExportError;

/// 渲染倍率
pub const RASTER_SCALE: f64 = 2.0;
/// JPEG 质量
pub const JPEG_QUALITY: f64 = 0.92;

/// html2canvas 选项（`scale` 另行传入）
///
/// 不能开启 `allowTaint`：跨域图片会污染画布，之后 `toBlob` 抛出 SecurityError。
pub const CAPTURE_OPTIONS: &str = r#"{"logging":false,"useCORS":true}"#;

/// 栅格化结果
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub jpeg: Vec<u8>,
}

#[cfg(target_arch = "wasm32")]
mod bridge {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = r#"
export async function rasterize_element(el, options, scale, quality) {
    if (typeof html2canvas !== 'function') {
        throw new Error('html2canvas is not loaded');
    }
    const canvas = await html2canvas(el, { ...JSON.parse(options), scale });
    const blob = await new Promise((resolve, reject) => canvas.toBlob(
        (b) => (b ? resolve(b) : reject(new Error('canvas.toBlob returned null'))),
        'image/jpeg',
        quality,
    ));
    const bytes = new Uint8Array(await blob.arrayBuffer());
    return { width: canvas.width, height: canvas.height, bytes };
}
"#)]
    extern "C" {
        #[wasm_bindgen(catch)]
        pub async fn rasterize_element(
            el: &web_sys::HtmlElement,
            options: &str,
            scale: f64,
            quality: f64,
        ) -> Result<JsValue, JsValue>;
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn rasterize(el: &web_sys::HtmlElement) -> Result<Raster, ExportError> {
    use wasm_bindgen::{JsCast, JsValue};

    let raster_err = |e: JsValue| ExportError::Raster(format!("{e:?}"));
    let value = bridge::rasterize_element(el, CAPTURE_OPTIONS, RASTER_SCALE, JPEG_QUALITY)
        .await
        .map_err(raster_err)?;

    let field = |name: &str| js_sys::Reflect::get(&value, &JsValue::from_str(name)).map_err(raster_err);
    let dimension = |name: &str| -> Result<u32, ExportError> {
        field(name)?
            .as_f64()
            .map(|v| v as u32)
            .ok_or_else(|| ExportError::Raster(format!("missing {name}")))
    };

    let width = dimension("width")?;
    let height = dimension("height")?;
    let jpeg = field("bytes")?
        .dyn_into::<js_sys::Uint8Array>()
        .map_err(raster_err)?
        .to_vec();

    Ok(Raster { width, height, jpeg })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn rasterize(_el: &web_sys::HtmlElement) -> Result<Raster, ExportError> {
    Err(ExportError::Raster("rasterization requires a browser".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_canvas_exportable() {
        let options: serde_json::Value = serde_json::from_str(CAPTURE_OPTIONS).unwrap();
        assert_eq!(options["useCORS"], true);
        assert!(options.get("allowTaint").is_none());
        assert!(options.get("scale").is_none());
    }
}
