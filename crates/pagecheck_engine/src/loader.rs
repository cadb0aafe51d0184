use std::path::{Path, PathBuf};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use pagecheck_logging::{pagecheck_debug, pagecheck_info};
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::http::{ensure_success, map_reqwest_error, read_capped};
use crate::{decode_markup, FailureKind, FetchError, HtmlPage, HttpSettings, LoadError};

/// Turns a command-line target into an [`HtmlPage`].
///
/// `http`/`https` targets are downloaded; anything else is a local path
/// whose address becomes a `file://` URL.
#[derive(Debug, Clone)]
pub struct PageLoader {
    settings: HttpSettings,
}

impl PageLoader {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }

    pub async fn load(&self, target: &str) -> Result<HtmlPage, LoadError> {
        match Url::parse(target) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch(url).await,
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| LoadError::FileAddress(PathBuf::from(target)))?;
                self.read_file(&path).await
            }
            _ => self.read_file(Path::new(target)).await,
        }
    }

    async fn read_file(&self, path: &Path) -> Result<HtmlPage, LoadError> {
        let io_error = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let absolute = tokio::fs::canonicalize(path).await.map_err(io_error)?;
        let bytes = tokio::fs::read(&absolute).await.map_err(io_error)?;
        let address = Url::from_file_path(&absolute)
            .map_err(|_| LoadError::FileAddress(absolute.clone()))?;

        let decoded = decode_markup(&bytes, None, Some(&address))?;
        pagecheck_info!(
            "loaded {} ({} bytes, {})",
            address,
            bytes.len(),
            decoded.encoding_label
        );
        Ok(HtmlPage::new(address, decoded.html))
    }

    async fn fetch(&self, url: Url) -> Result<HtmlPage, LoadError> {
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.settings.build_client(Some(redirect_counter.clone()))?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        ensure_success(&response)?;

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.settings.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                )
                .into());
            }
        }

        let bytes = read_capped(response, self.settings.max_bytes).await?;
        pagecheck_debug!(
            "fetched {} -> {} after {} redirect(s)",
            url,
            final_url,
            redirect_counter.load(Ordering::Relaxed)
        );

        let decoded = decode_markup(&bytes, content_type.as_deref(), Some(&final_url))?;
        pagecheck_info!(
            "loaded {} ({} bytes, {})",
            final_url,
            bytes.len(),
            decoded.encoding_label
        );
        Ok(HtmlPage::new(final_url, decoded.html))
    }
}
