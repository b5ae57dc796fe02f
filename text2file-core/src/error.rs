use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "pdf")]
    #[error("PDF error: {0}")]
    Pdf(#[from] oxidize_pdf::PdfError),

    #[cfg(feature = "images")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported file extension: {0}")]
    Unsupported(String),

    #[error("{0}")]
    Unavailable(Capability),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Optional output backends, each compiled in through a cargo feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Pdf,
    Images,
}

impl Capability {
    pub fn feature(&self) -> &'static str {
        match self {
            Capability::Pdf => "pdf",
            Capability::Images => "images",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self {
            Capability::Pdf => "PDF",
            Capability::Images => "image",
        };
        write!(
            f,
            "{} support is not available. Rebuild with: cargo build --features {}",
            what,
            self.feature()
        )
    }
}
