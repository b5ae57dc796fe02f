//! # text2file
//!
//! Generates placeholder test files from a content string. The extension of
//! each requested file picks the generator:
//!
//! - **Text** (`txt md csv json html css js py`): content written verbatim as UTF-8
//! - **PDF** (`pdf`): content wrapped at 80 columns in 12pt Helvetica, one row per line
//! - **Images** (`jpg jpeg png bmp gif`): content wrapped at 40 columns and
//!   centred on an 800x600 white canvas
//!
//! Files are named `generated_<YYYYMMDD_HHMMSS>.<ext>`.
//!
//! PDF and image output sit behind the `pdf` and `images` cargo features
//! (both on by default). With a feature disabled the matching extensions
//! report [`Outcome::Unavailable`] instead of failing the batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use text2file::{Generator, GeneratorOptions};
//!
//! let generator = Generator::new(GeneratorOptions::new().with_output_dir("out"));
//! let report = generator.generate_all("Example content", ["txt", "jpg"]);
//!
//! for file in report.generated() {
//!     println!("Generated: {}", file.file_name());
//! }
//! ```

pub mod error;
pub mod extension;
pub mod generator;
pub mod naming;
pub mod options;
pub mod pdf;
pub mod raster;
pub mod text_file;
pub mod wrap;

pub use error::{Capability, GenerateError, Result};
pub use extension::{Extension, FileKind, RasterFormat};
pub use generator::{GeneratedFile, GenerationReport, Generator, Outcome};
pub use options::{GeneratorOptions, ImageLayout, PdfLayout};
pub use wrap::wrap;

/// Current version of text2file
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
