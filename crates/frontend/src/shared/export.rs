//! Downloads: CSV that Excel opens directly (UTF-8 BOM, `;` separator)
//! and pretty-printed JSON backups.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a spreadsheet
pub trait ExcelExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

impl<T: ExcelExportable> ExcelExportable for std::sync::Arc<T> {
    fn headers() -> Vec<&'static str> {
        T::headers()
    }

    fn to_csv_row(&self) -> Vec<String> {
        self.as_ref().to_csv_row()
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("browser refused the download: {0}")]
    Browser(String),
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn browser_err(context: &str, e: impl std::fmt::Debug) -> ExportError {
    ExportError::Browser(format!("{context}: {e:?}"))
}

/// CSV text with BOM and header row
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv = String::from('\u{FEFF}');
    csv.push_str(&T::headers().join(";"));
    csv.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv.push_str(&row.join(";"));
        csv.push('\n');
    }
    Ok(csv)
}

/// Build the CSV and hand it to the browser as a download
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), ExportError> {
    let csv = build_csv(data)?;
    let blob = create_blob(&csv, "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)?;
    log::info!("exported {} rows to {}", data.len(), filename);
    Ok(())
}

pub fn build_json<T: Serialize>(data: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Serialize `data` and hand it to the browser as a `.json` download
pub fn export_json<T: Serialize>(data: &T, filename: &str) -> Result<(), ExportError> {
    let json = build_json(data)?;
    let blob = create_blob(&json, "application/json;charset=utf-8;")?;
    download_blob(&blob, filename)?;
    log::info!("exported {} bytes to {}", json.len(), filename);
    Ok(())
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains([';', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, ExportError> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| browser_err("blob", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Browser("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Browser("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Browser("no body".into()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(|e| browser_err("object url", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_err("anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser_err("anchor cast", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser_err("anchor style", e))?;

    body.append_child(&anchor).map_err(|e| browser_err("append", e))?;
    anchor.click();
    body.remove_child(&anchor).map_err(|e| browser_err("remove", e))?;

    Url::revoke_object_url(&url).map_err(|e| browser_err("revoke", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl ExcelExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Tên", "Số lượng"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_build_csv_escapes_cells() {
        let csv = build_csv(&[Row("Xi măng", 500.0), Row("Thép \"D10\"; loại 1", 2.5)]).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "Tên;Số lượng");
        assert_eq!(lines[1], "Xi măng;500");
        assert_eq!(lines[2], "\"Thép \"\"D10\"\"; loại 1\";2.5");
        assert!(matches!(build_csv::<Row>(&[]), Err(ExportError::Empty)));
    }
}
