//! Scanner, decoder and JSON renderer for Merc/Diku area files.
//!
//! Only the OBJECTS section is decoded with full fidelity; all other
//! sections are skip-scanned. See [`section::parse_area`] for the entry
//! point and [`convert_file`] for the whole pipeline.

pub mod json;
pub mod objects;
pub mod reader;
pub mod section;
pub mod tables;

use area_types::Area;

#[derive(Debug, thiserror::Error)]
pub enum AreaError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read an area file and return its JSON document.
pub fn convert_file(path: &str) -> Result<String, AreaError> {
    let data = std::fs::read(path).map_err(|source| AreaError::Open {
        path: path.to_string(),
        source,
    })?;
    Ok(convert_bytes(&data, path))
}

/// Convert in-memory area text; `file_name` only feeds the area header.
pub fn convert_bytes(data: &[u8], file_name: &str) -> String {
    let area = Area::placeholder(file_name);
    let mut reader = reader::AreaReader::new(data);
    let objects = section::parse_area(&mut reader);
    json::render_document(&area, &objects)
}
