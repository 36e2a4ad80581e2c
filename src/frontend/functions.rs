use std::path::PathBuf;

use crate::config::Config;

/// Filesystem layout of the prebuilt frontend bundle.
///
/// Resolved once at startup: the `/static` mount decision is fixed for the
/// process lifetime, while `index.html` presence is re-checked per request so
/// a freshly built frontend is picked up without a restart.
#[derive(Debug, Clone)]
pub struct FrontendAssets {
    pub build_dir: PathBuf,
    pub static_dir: Option<PathBuf>,
    pub index_file: PathBuf,
}

impl FrontendAssets {
    pub fn discover(config: &Config) -> Self {
        let build_dir = config.effective_frontend_dir();
        let static_dir = build_dir.join("static");
        let static_dir = if static_dir.is_dir() {
            log::info!("Mounting /static from {}", static_dir.display());
            Some(static_dir)
        } else {
            log::warn!(
                "Static asset directory {} not found, /static routes disabled",
                static_dir.display()
            );
            None
        };

        Self {
            index_file: build_dir.join("index.html"),
            build_dir,
            static_dir,
        }
    }
}

/// Residual path as the catch-all sees it: exactly one leading slash stripped.
pub fn residual_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Unmatched API request, as opposed to a frontend route. Matches on the
/// literal `api/` prefix of the residual path, so the bare `api` segment
/// still falls through to the frontend fallback.
pub fn is_unmatched_api_path(residual: &str) -> bool {
    residual.starts_with("api/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_strips_a_single_leading_slash() {
        assert_eq!(residual_path("/api/missing"), "api/missing");
        assert_eq!(residual_path("//api/missing"), "/api/missing");
        assert_eq!(residual_path("/"), "");
    }

    #[test]
    fn api_prefix_requires_trailing_slash_segment() {
        assert!(is_unmatched_api_path("api/missing"));
        assert!(is_unmatched_api_path("api/"));
        assert!(!is_unmatched_api_path("api"));
        assert!(!is_unmatched_api_path("apiary/bees"));
        assert!(!is_unmatched_api_path("static/js/main.js"));
        assert!(!is_unmatched_api_path(""));
    }

    #[test]
    fn double_slash_api_path_is_a_frontend_route() {
        // `//api/x` loses only one slash, so the residual `/api/x` does not
        // carry the literal `api/` prefix.
        assert!(!is_unmatched_api_path(residual_path("//api/x")));
    }

    #[test]
    fn discover_skips_static_mount_when_directory_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            frontend_dir: Some(tmp.path().join("build").display().to_string()),
        };

        let assets = FrontendAssets::discover(&config);
        assert!(assets.static_dir.is_none());
        assert_eq!(assets.index_file, tmp.path().join("build/index.html"));
    }

    #[test]
    fn discover_mounts_static_when_directory_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let static_dir = tmp.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            frontend_dir: Some(tmp.path().display().to_string()),
        };

        let assets = FrontendAssets::discover(&config);
        assert_eq!(assets.static_dir, Some(static_dir));
    }
}
