#![forbid(unsafe_code)]

//! Trigger target filtering.
//!
//! A trigger anchor is only loadable when its href points at an image. A
//! non-image href makes `open` a defined no-op, not an error: linking a
//! trigger at a PDF is a configuration choice, not a fault.

/// Extensions the lightbox will load, matched case-insensitively against
/// the href's path component.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];

/// Whether the href ends in a supported image extension, optionally
/// followed by a query string.
#[must_use]
pub fn is_image_target(href: &str) -> bool {
    let path = href.split('?').next().unwrap_or(href);
    let Some((_, ext)) = path.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_image_paths() {
        assert!(is_image_target("/images/cat.png"));
        assert!(is_image_target("https://example.com/a/b/photo.jpeg"));
        assert!(is_image_target("pic.webp"));
        assert!(is_image_target("diagram.svg"));
        assert!(is_image_target("scan.bmp"));
        assert!(is_image_target("anim.gif"));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_image_target("/images/CAT.PNG"));
        assert!(is_image_target("photo.JpG"));
    }

    #[test]
    fn query_string_allowed() {
        assert!(is_image_target("/images/cat.png?width=800"));
        assert!(is_image_target("photo.jpg?a=1&b=2"));
    }

    #[test]
    fn non_image_targets_rejected() {
        assert!(!is_image_target("/files/report.pdf"));
        assert!(!is_image_target("/page.html"));
        assert!(!is_image_target("/images/"));
        assert!(!is_image_target(""));
        assert!(!is_image_target("no-extension"));
    }

    #[test]
    fn extension_must_terminate_the_path() {
        // A fragment or extra path segment after the extension does not count.
        assert!(!is_image_target("photo.svg#icon"));
        assert!(!is_image_target("cat.png/extra"));
        // But a query right after the extension is fine.
        assert!(is_image_target("cat.png?v=2"));
    }
}
