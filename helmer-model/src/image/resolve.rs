use super::sizes::ImageSize;

/// Local asset served when the upstream has no image for an entity.
pub const PLACEHOLDER_ASSET: &str = "/placeholder.svg";

/// Resolve an upstream image reference against the CDN base and a size
/// bucket. Pure function, no network effect.
///
/// Upstream paths arrive with a leading slash and bases may carry a trailing
/// one; both are normalized so the result never contains a double slash. A
/// missing or empty path resolves to [`PLACEHOLDER_ASSET`].
pub fn resolve_image_url(base: &str, size: ImageSize, path: Option<&str>) -> String {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return PLACEHOLDER_ASSET.to_string();
    };

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{}/{path}", size.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PosterSize;

    const BASE: &str = "https://image.tmdb.org/t/p";

    #[test]
    fn null_path_resolves_to_placeholder() {
        assert_eq!(
            resolve_image_url(BASE, ImageSize::poster(), None),
            PLACEHOLDER_ASSET
        );
        assert_eq!(
            resolve_image_url(BASE, ImageSize::profile(), Some("")),
            PLACEHOLDER_ASSET
        );
    }

    #[test]
    fn joins_base_size_and_path() {
        assert_eq!(
            resolve_image_url(BASE, ImageSize::poster(), Some("/inception.jpg")),
            "https://image.tmdb.org/t/p/w500/inception.jpg"
        );
    }

    #[test]
    fn never_produces_double_slashes() {
        let with_trailing = format!("{BASE}/");
        let url = resolve_image_url(
            &with_trailing,
            ImageSize::Poster(PosterSize::W780),
            Some("/poster.jpg"),
        );
        assert_eq!(url, "https://image.tmdb.org/t/p/w780/poster.jpg");
        assert!(!url.replace("https://", "").contains("//"));
    }
}
