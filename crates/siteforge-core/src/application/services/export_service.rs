//! Export Service - turns a rendered design into files on disk.
//!
//! Html and Static exports write real output. React and Vue are recognized
//! format names whose emitters are not built yet; they return an
//! `Unsupported` outcome without touching the filesystem.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    application::{ports::Filesystem, services::FileEmitter},
    domain::{ArtifactSet, Catalog, DesignDocument, DomainError, render},
    error::SiteforgeResult,
};

/// Target format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Bare `index.html` + `styles.css`.
    Html,
    /// Html output plus a `manifest.json` describing the bundle.
    Static,
    /// Recognized but not yet emitted.
    React,
    /// Recognized but not yet emitted.
    Vue,
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "static" => Ok(Self::Static),
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            other => Err(DomainError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Html => "html",
            Self::Static => "static",
            Self::React => "react",
            Self::Vue => "vue",
        };
        write!(f, "{name}")
    }
}

/// Options controlling an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Destination directory. When absent an auto-named directory with a
    /// timestamp token is used.
    pub output_dir: Option<PathBuf>,
    /// Bundle name recorded in the static manifest.
    pub name: Option<String>,
}

/// Result of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// The format is recognized but has no emitter.
    Unsupported { format: String, message: String },
}

/// Export orchestration service.
pub struct ExportService {
    catalog: Arc<Catalog>,
    filesystem: Box<dyn Filesystem>,
}

impl ExportService {
    pub fn new(catalog: Arc<Catalog>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            catalog,
            filesystem,
        }
    }

    /// Export a design document in the requested format.
    ///
    /// Writes are not transactional; an I/O failure propagates and leaves any
    /// partial output in place.
    #[instrument(skip_all, fields(design_id = %document.id, format = %format))]
    pub fn export(
        &self,
        document: &DesignDocument,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> SiteforgeResult<ExportOutcome> {
        match format {
            ExportFormat::Html | ExportFormat::Static => {
                self.export_static(document, format, options)
            }
            ExportFormat::React | ExportFormat::Vue => Ok(ExportOutcome::Unsupported {
                format: format.to_string(),
                message: format!("{format} export is not implemented yet"),
            }),
        }
    }

    fn export_static(
        &self,
        document: &DesignDocument,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> SiteforgeResult<ExportOutcome> {
        let page = render(&self.catalog, document);

        let name = options
            .name
            .clone()
            .or_else(|| document.project_ref.clone())
            .unwrap_or_else(|| document.id.clone());

        let output_dir = options
            .output_dir
            .clone()
            .unwrap_or_else(|| auto_output_dir(&name));

        let mut artifacts = ArtifactSet::new();
        artifacts.insert(PathBuf::from("index.html"), page.html);
        artifacts.insert(PathBuf::from("styles.css"), page.css);

        if format == ExportFormat::Static {
            let manifest = json!({
                "name": name,
                "version": "1.0.0",
                "files": ["index.html", "styles.css"],
            });
            artifacts.insert(
                PathBuf::from("manifest.json"),
                serde_json::to_string_pretty(&manifest).unwrap_or_default(),
            );
        }

        let files = FileEmitter::write(&artifacts, &output_dir, self.filesystem.as_ref())?;
        info!(output_dir = %output_dir.display(), files = files.len(), "Export written");

        Ok(ExportOutcome::Written { output_dir, files })
    }
}

/// Auto-named destination with a millisecond timestamp uniqueness token.
fn auto_output_dir(name: &str) -> PathBuf {
    PathBuf::from(format!("{}-export-{}", name, Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("html".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!(
            "STATIC".parse::<ExportFormat>().unwrap(),
            ExportFormat::Static
        );
        assert_eq!(
            "react".parse::<ExportFormat>().unwrap(),
            ExportFormat::React
        );
        assert_eq!("vue".parse::<ExportFormat>().unwrap(), ExportFormat::Vue);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat { format } if format == "pdf"));
    }
}
