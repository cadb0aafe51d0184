//! pagecheck engine: HTTP, page loading and the validation entry point.
mod client;
mod decode;
mod filename;
mod http;
mod loader;
mod markup;
mod page;
mod persist;
mod types;
mod validator;

pub use client::{ReqwestValidatorClient, ValidatorClient};
pub use decode::{decode_markup, DecodeError, DecodedMarkup};
pub use filename::annotated_filename;
pub use http::HttpSettings;
pub use loader::PageLoader;
pub use page::HtmlPage;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{FailureKind, FetchError, LoadError};
pub use validator::PageValidator;
