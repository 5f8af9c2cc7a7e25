//! 导出操作
//!
//! 把共享层的报告与 PDF 组装接到浏览器下载上。任何一步失败都不会产生文件。

use crate::web::{MIME_JSON, MIME_PDF, download_bytes, download_text, rasterize};
use factfusion_shared::error::ExportError;
use factfusion_shared::pdf::{JpegImage, single_image_pdf};
use factfusion_shared::report::{
    AnalysisReport, DASHBOARD_REPORT_NAME, DashboardReport, export_file_name, to_json_pretty,
};
use factfusion_shared::{AnalysisRecord, Clock, SessionUser, SystemClock};

/// 导出某条分析记录的 JSON 报告
pub fn export_json(record: &AnalysisRecord, user: Option<&SessionUser>) -> Result<(), ExportError> {
    let now = SystemClock.now();
    let report = AnalysisReport::build(record, user, now);
    let json = to_json_pretty(&report)?;
    let name = format!("{}.json", export_file_name(&record.file_name, now));
    download_text(&name, MIME_JSON, &json)
}

/// 把页面上的结果区域渲染为单页 PDF
pub async fn export_pdf(element: web_sys::HtmlElement, record: AnalysisRecord) -> Result<(), ExportError> {
    let raster = rasterize(&element).await?;
    let pdf = single_image_pdf(JpegImage {
        width: raster.width,
        height: raster.height,
        data: &raster.jpeg,
    })?;
    let name = format!("{}.pdf", export_file_name(&record.file_name, SystemClock.now()));
    download_bytes(&name, MIME_PDF, &pdf)
}

/// 控制面板上的固定汇总报告
pub fn export_dashboard_report() -> Result<(), ExportError> {
    let report = DashboardReport::new(SystemClock.now());
    let json = to_json_pretty(&report)?;
    download_text(&format!("{DASHBOARD_REPORT_NAME}.json"), MIME_JSON, &json)
}
