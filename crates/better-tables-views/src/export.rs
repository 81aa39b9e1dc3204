//! Export request detection
//!
//! Only recognises that an export was asked for and names the download;
//! producing the file is left to the host.

use crate::request::TableRequest;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Query parameter selecting an export format
pub const EXPORT_PARAM: &str = "export";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	Csv,
	Json,
}

impl ExportFormat {
	pub fn extension(self) -> &'static str {
		match self {
			Self::Csv => "csv",
			Self::Json => "json",
		}
	}

	pub fn content_type(self) -> &'static str {
		match self {
			Self::Csv => "text/csv",
			Self::Json => "application/json",
		}
	}
}

impl FromStr for ExportFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"csv" => Ok(Self::Csv),
			"json" => Ok(Self::Json),
			other => Err(format!("unknown export format '{}'", other)),
		}
	}
}

impl fmt::Display for ExportFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.extension())
	}
}

/// A recognised export request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
	pub format: ExportFormat,
	/// `<table name>.<extension>`
	pub filename: String,
}

/// Detects `export=<format>` on list requests
#[derive(Debug, Clone)]
pub struct ExportProvider {
	table_name: String,
	formats: Vec<ExportFormat>,
}

impl ExportProvider {
	/// Provider offering CSV and JSON downloads named after `table_name`
	pub fn new(table_name: impl Into<String>) -> Self {
		Self {
			table_name: table_name.into(),
			formats: vec![ExportFormat::Csv, ExportFormat::Json],
		}
	}

	/// Restrict the offered formats
	pub fn with_formats(mut self, formats: Vec<ExportFormat>) -> Self {
		self.formats = formats;
		self
	}

	pub fn formats(&self) -> &[ExportFormat] {
		&self.formats
	}

	/// Export requested by `request`, if any
	///
	/// # Examples
	///
	/// ```
	/// use better_tables_views::{ExportFormat, ExportProvider, TableRequest};
	///
	/// let provider = ExportProvider::new("orders");
	/// let export = provider.requested(&TableRequest::get("/order/?export=csv")).unwrap();
	/// assert_eq!(export.format, ExportFormat::Csv);
	/// assert_eq!(export.filename, "orders.csv");
	/// ```
	pub fn requested(&self, request: &TableRequest) -> Option<ExportRequest> {
		let raw = request.query().get_non_empty(EXPORT_PARAM)?;
		let format = match raw.parse::<ExportFormat>() {
			Ok(format) if self.formats.contains(&format) => format,
			Ok(format) => {
				tracing::debug!(%format, "export format not offered by this table");
				return None;
			}
			Err(error) => {
				tracing::debug!(%error, "ignoring export request");
				return None;
			}
		};
		Some(ExportRequest {
			format,
			filename: format!("{}.{}", self.table_name, format.extension()),
		})
	}
}
