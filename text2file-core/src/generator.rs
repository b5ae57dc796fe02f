//! Dispatch from extensions to generators.

use crate::error::{Capability, GenerateError, Result};
use crate::extension::{Extension, FileKind};
use crate::options::GeneratorOptions;
use crate::{pdf, raster, text_file};
use std::path::{Path, PathBuf};

/// A file written by one of the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl GeneratedFile {
    /// The file name without its directory.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// What happened to a single requested extension.
#[derive(Debug)]
pub enum Outcome {
    Generated(GeneratedFile),
    /// No generator handles this extension.
    Unsupported,
    /// The generator was compiled out.
    Unavailable(Capability),
    Failed(GenerateError),
}

impl From<Result<GeneratedFile>> for Outcome {
    fn from(result: Result<GeneratedFile>) -> Self {
        match result {
            Ok(file) => Outcome::Generated(file),
            Err(GenerateError::Unsupported(_)) => Outcome::Unsupported,
            Err(GenerateError::Unavailable(capability)) => Outcome::Unavailable(capability),
            Err(error) => Outcome::Failed(error),
        }
    }
}

/// Outcomes for a batch of extensions, in request order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<(Extension, Outcome)>,
}

impl GenerationReport {
    pub fn generated(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.outcomes.iter().filter_map(|(_, outcome)| match outcome {
            Outcome::Generated(file) => Some(file),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.generated().next().is_none()
    }
}

/// Writes content to files whose type follows their extension.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    fn output_dir(&self) -> &Path {
        &self.options.output_dir
    }

    /// Generates one file for `extension`.
    pub fn generate(&self, content: &str, extension: &Extension) -> Result<GeneratedFile> {
        let kind = extension
            .kind()
            .ok_or_else(|| GenerateError::Unsupported(extension.to_string()))?;
        let dir = self.output_dir();

        let path = match kind {
            FileKind::Text => text_file::write_text_file(dir, content, extension.as_str())?,
            FileKind::Pdf => pdf::generate_pdf(dir, content, &self.options.pdf)?,
            FileKind::Image(format) => {
                raster::generate_image(dir, content, extension.as_str(), format, &self.options)?
            }
        };

        Ok(GeneratedFile { path, kind })
    }

    /// Generates one file per extension. A failure for one extension never
    /// stops the others.
    pub fn generate_all<I, S>(&self, content: &str, extensions: I) -> GenerationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let outcomes = extensions
            .into_iter()
            .map(|raw| {
                let extension = Extension::parse(raw.as_ref());
                let outcome = Outcome::from(self.generate(content, &extension));
                if let Outcome::Failed(error) = &outcome {
                    tracing::warn!(%extension, %error, "generation failed");
                }
                (extension, outcome)
            })
            .collect();

        GenerationReport { outcomes }
    }
}
