/// Cover image resolution and fetching
///
/// The API returns cover references in several shapes: absolute URLs,
/// `/media/...` paths, `media/...` without the leading slash, or bare
/// file names. Everything is normalized against the configured media
/// host before fetching.

/// Resolve a cover reference into a fetchable URL
pub fn resolve_cover_url(media_base: &str, cover_path: &str) -> String {
    // Already a full URL
    if cover_path.starts_with("http://") || cover_path.starts_with("https://") {
        return cover_path.to_string();
    }

    let base = media_base.trim_end_matches('/');

    if cover_path.starts_with("/media/") {
        // Path already includes /media/
        format!("{}{}", base, cover_path)
    } else if cover_path.starts_with("media/") {
        // Path has media/ without the leading slash
        format!("{}/{}", base, cover_path)
    } else if cover_path.starts_with('/') {
        // Leading slash but no media segment
        format!("{}/media{}", base, cover_path)
    } else {
        // Bare file name
        format!("{}/media/{}", base, cover_path)
    }
}

/// Fetch the bytes of one cover image
///
/// One round trip, no retry; on failure the card falls back to its
/// placeholder.
pub async fn fetch_cover(url: String) -> Result<Vec<u8>, String> {
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Request failed for {}: {}", url, e))?;

    if !resp.status().is_success() {
        return Err(format!("Cover fetch error {}: {}", url, resp.status()));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| format!("Read body failed for {}: {}", url, e))?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_bare_file_name_gains_media_prefix() {
        assert_eq!(
            resolve_cover_url(BASE, "cover.jpg"),
            "http://localhost:8000/media/cover.jpg"
        );
    }

    #[test]
    fn test_media_path_is_host_joined_unchanged() {
        assert_eq!(
            resolve_cover_url(BASE, "/media/cover.jpg"),
            "http://localhost:8000/media/cover.jpg"
        );
    }

    #[test]
    fn test_media_path_without_leading_slash() {
        assert_eq!(
            resolve_cover_url(BASE, "media/covers/dune.jpg"),
            "http://localhost:8000/media/covers/dune.jpg"
        );
    }

    #[test]
    fn test_rooted_path_is_nested_under_media() {
        assert_eq!(
            resolve_cover_url(BASE, "/covers/dune.jpg"),
            "http://localhost:8000/media/covers/dune.jpg"
        );
    }

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(
            resolve_cover_url(BASE, "https://example.com/y.jpg"),
            "https://example.com/y.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_does_not_double_up() {
        assert_eq!(
            resolve_cover_url("http://localhost:8000/", "cover.jpg"),
            "http://localhost:8000/media/cover.jpg"
        );
    }
}
