//! 单页 PDF 生成
//!
//! 把一张 JPEG 作为整页图片写入 PDF（`DCTDecode`，无需重新编码）。
//! 页面尺寸按 96 DPI 把像素换算成点，与图片宽高比一致。

use crate::error::ExportError;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};

/// 1 px = 0.75 pt
pub const PX_TO_PT: f64 = 0.75;

/// JPEG 图像
#[derive(Debug, Clone, Copy)]
pub struct JpegImage<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl JpegImage<'_> {
    /// JPEG 以 SOI 标记 `FF D8` 开头
    fn looks_valid(&self) -> bool {
        self.data.starts_with(&[0xFF, 0xD8])
    }
}

const CATALOG_ID: Ref = Ref::new(1);
const PAGE_TREE_ID: Ref = Ref::new(2);
const PAGE_ID: Ref = Ref::new(3);
const IMAGE_ID: Ref = Ref::new(4);
const CONTENT_ID: Ref = Ref::new(5);
const IMAGE_NAME: Name<'static> = Name(b"Im0");

/// 生成只有一页、整页铺满给定图片的 PDF
pub fn single_image_pdf(image: JpegImage<'_>) -> Result<Vec<u8>, ExportError> {
    if image.width == 0 || image.height == 0 {
        return Err(ExportError::Encode("image has no pixels".into()));
    }
    if !image.looks_valid() {
        return Err(ExportError::Encode("image is not a JPEG".into()));
    }
    let (Ok(width), Ok(height)) = (i32::try_from(image.width), i32::try_from(image.height)) else {
        return Err(ExportError::Encode("image is too large".into()));
    };

    let page_w = (image.width as f64 * PX_TO_PT) as f32;
    let page_h = (image.height as f64 * PX_TO_PT) as f32;

    let mut pdf = Pdf::new();
    pdf.catalog(CATALOG_ID).pages(PAGE_TREE_ID);
    pdf.pages(PAGE_TREE_ID).kids([PAGE_ID]).count(1);

    let mut page = pdf.page(PAGE_ID);
    page.media_box(Rect::new(0.0, 0.0, page_w, page_h));
    page.parent(PAGE_TREE_ID);
    page.contents(CONTENT_ID);
    page.resources().x_objects().pair(IMAGE_NAME, IMAGE_ID);
    page.finish();

    let mut xobject = pdf.image_xobject(IMAGE_ID, image.data);
    xobject.filter(Filter::DctDecode);
    xobject.width(width);
    xobject.height(height);
    xobject.color_space().device_rgb();
    xobject.bits_per_component(8);
    xobject.finish();

    let mut content = Content::new();
    content.save_state();
    content.transform([page_w, 0.0, 0.0, page_h, 0.0, 0.0]);
    content.x_object(IMAGE_NAME);
    content.restore_state();
    pdf.stream(CONTENT_ID, &content.finish());

    tracing::debug!(
        width = image.width,
        height = image.height,
        jpeg_bytes = image.data.len(),
        "pdf assembled"
    );
    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAKE_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xFF, 0xD9];

    fn text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn page_matches_image_size() {
        let pdf = single_image_pdf(JpegImage {
            width: 800,
            height: 1200,
            data: FAKE_JPEG,
        })
        .unwrap();
        let s = text(&pdf);

        assert!(s.starts_with("%PDF-"));
        assert!(s.trim_end().ends_with("%%EOF"));
        assert!(s.contains("/MediaBox [0 0 600 900]"));
        assert!(s.contains("/Width 800"));
        assert!(s.contains("/Height 1200"));
        assert!(s.contains("/Filter /DCTDecode"));
    }

    #[test]
    fn image_bytes_are_embedded_unchanged() {
        let pdf = single_image_pdf(JpegImage {
            width: 10,
            height: 10,
            data: FAKE_JPEG,
        })
        .unwrap();

        assert!(pdf.windows(FAKE_JPEG.len()).any(|w| w == FAKE_JPEG));
        let s = text(&pdf);
        assert!(s.contains("/Im0 Do"));
        assert!(s.contains("7.5 0 0 7.5 0 0 cm"));
    }

    #[test]
    fn rejects_empty_or_non_jpeg_input() {
        let empty = single_image_pdf(JpegImage {
            width: 0,
            height: 10,
            data: FAKE_JPEG,
        });
        assert!(matches!(empty, Err(ExportError::Encode(_))));

        let png = single_image_pdf(JpegImage {
            width: 1,
            height: 1,
            data: b"\x89PNG",
        });
        assert!(matches!(png, Err(ExportError::Encode(_))));
    }
}
