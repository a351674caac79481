//! Where a download comes from and where it lands.
use crate::error::FetchError;
use percent_encoding::percent_decode_str;
use sanitize_filename::sanitize;
use url::Url;

/// Destination name used when the URL path has no usable last segment.
pub const DEFAULT_FILE_NAME: &str = "downloaded_file";

/// A parsed download URL plus the derived destination file name.
///
/// Immutable once constructed; both tasks only ever read it.
#[derive(Debug, Clone)]
pub struct DownloadTarget {
    /// The resource to fetch.
    pub url: Url,
    /// Path the body is written to, relative to the working directory.
    pub file_name: String,
}

impl DownloadTarget {
    /// Parses `raw` and derives the destination file name from its path.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let url = Url::parse(raw)?;
        let file_name = file_name_from_url(&url);
        Ok(Self { url, file_name })
    }
}

/// Extracts a clean filename from a URL.
///
/// 1. Takes the last segment of the path.
/// 2. URL-decodes it (converts %20 to space, etc.).
/// 3. Sanitizes it to remove characters invalid for the OS.
/// 4. Falls back to [`DEFAULT_FILE_NAME`] if nothing usable remains.
pub fn file_name_from_url(url: &Url) -> String {
    url.path_segments()
        .map(|mut s| s.next_back().unwrap_or("").to_string())
        .map(|s| percent_decode_str(&s).decode_utf8_lossy().to_string())
        .map(sanitize)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_extraction() {
        // Simple case
        assert_eq!(
            DownloadTarget::parse("https://host.example/files/report.rar")
                .unwrap()
                .file_name,
            "report.rar"
        );

        // Query parameters are not part of the name
        assert_eq!(
            DownloadTarget::parse("https://host.example/image.png?id=123&quality=high")
                .unwrap()
                .file_name,
            "image.png"
        );

        // URL encoding (%20)
        assert_eq!(
            DownloadTarget::parse("https://host.example/my%20vacation%20photo.jpg")
                .unwrap()
                .file_name,
            "my vacation photo.jpg"
        );
    }

    #[test]
    fn test_filename_fallback() {
        // Ends in a slash
        assert_eq!(
            DownloadTarget::parse("https://host.example/").unwrap().file_name,
            DEFAULT_FILE_NAME
        );

        // No path at all; the parser normalizes it to "/"
        assert_eq!(
            DownloadTarget::parse("https://host.example").unwrap().file_name,
            DEFAULT_FILE_NAME
        );
    }

    #[test]
    fn test_rejects_unparseable_url() {
        assert!(matches!(
            DownloadTarget::parse("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
