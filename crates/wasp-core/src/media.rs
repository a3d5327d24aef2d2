//! Media type inference from file extensions.
//!
//! Unknown extensions yield `None`; the write is then sent without a
//! `Content-Type` header and the storage service decides.

use std::path::Path;

use mime::Mime;

/// Guess the media type of `path` from its extension (case-insensitive).
pub fn media_type_for(path: &Path) -> Option<Mime> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let essence = match ext.as_str() {
        "html" | "htm" => return Some(mime::TEXT_HTML_UTF_8),
        "css" => return Some(mime::TEXT_CSS_UTF_8),
        "js" | "mjs" | "cjs" => return Some(mime::TEXT_JAVASCRIPT),
        "json" | "map" => return Some(mime::APPLICATION_JSON),
        "txt" => return Some(mime::TEXT_PLAIN_UTF_8),
        "xml" => return Some(mime::TEXT_XML),
        "csv" => return Some(mime::TEXT_CSV_UTF_8),
        "svg" => return Some(mime::IMAGE_SVG),
        "png" => return Some(mime::IMAGE_PNG),
        "jpg" | "jpeg" => return Some(mime::IMAGE_JPEG),
        "gif" => return Some(mime::IMAGE_GIF),
        "bmp" => return Some(mime::IMAGE_BMP),
        "woff" => return Some(mime::FONT_WOFF),
        "woff2" => return Some(mime::FONT_WOFF2),
        "pdf" => return Some(mime::APPLICATION_PDF),
        "md" | "markdown" => "text/markdown; charset=utf-8",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "jsonld" => "application/ld+json",
        "webmanifest" => "application/manifest+json",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "wasm" => "application/wasm",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        _ => return None,
    };
    essence.parse().ok()
}
