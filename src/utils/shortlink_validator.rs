//! Shortlink candidate validation.
//!
//! Decides whether a path could possibly be a shortlink before any lookup is
//! attempted. Paths that belong to the single-page app (its bundle, manifest
//! and dev-server artifacts) are rejected so they fall through to static
//! file serving.
//!
//! The predicate is pure and independent of the router, so it is also used
//! by the `admin validate` command.

use tracing::debug;

/// Files served by the SPA that can never be shortlinks.
const REJECTED_FILES: &[&str] = &["manifest.json", "index.html", "favicon.ico"];

/// Top-level directories served by the SPA.
const REJECTED_DIRECTORIES: &[&str] = &["static", "sockjs-node"];

/// Webpack hot-reload artifacts end with this suffix.
const HOT_UPDATE_SUFFIX: &str = "hot-update.js";

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    KnownFile,
    KnownDirectory,
    HotUpdate,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "it is empty",
            Self::KnownFile => "it is a known static file",
            Self::KnownDirectory => "it is under a known static directory",
            Self::HotUpdate => "it is a webpack hot-update file",
        }
    }
}

/// Checks a candidate against the rejection rules, first match wins.
///
/// # Rules
///
/// 1. Empty or whitespace-only
/// 2. One of `manifest.json`, `index.html`, `favicon.ico`
/// 3. First `/` segment is `static` or `sockjs-node`
/// 4. Ends with `hot-update.js`
///
/// All comparisons are ASCII case-insensitive.
pub fn check_shortlink(candidate: &str) -> Result<(), Rejection> {
    if candidate.trim().is_empty() {
        return Err(Rejection::Empty);
    }

    if REJECTED_FILES
        .iter()
        .any(|file| candidate.eq_ignore_ascii_case(file))
    {
        return Err(Rejection::KnownFile);
    }

    let top_directory = candidate.split('/').next().unwrap_or(candidate);
    if REJECTED_DIRECTORIES
        .iter()
        .any(|dir| top_directory.eq_ignore_ascii_case(dir))
    {
        return Err(Rejection::KnownDirectory);
    }

    if ends_with_ignore_ascii_case(candidate, HOT_UPDATE_SUFFIX) {
        return Err(Rejection::HotUpdate);
    }

    Ok(())
}

/// Returns true if `candidate` may be a shortlink.
///
/// # Examples
///
/// ```
/// use golinks::utils::shortlink_validator::is_valid_shortlink;
///
/// assert!(is_valid_shortlink("coolproduct"));
/// assert!(!is_valid_shortlink("static/js/main.js"));
/// assert!(!is_valid_shortlink("Index.HTML"));
/// ```
pub fn is_valid_shortlink(candidate: &str) -> bool {
    match check_shortlink(candidate) {
        Ok(()) => {
            debug!(candidate, "Shortlink candidate accepted");
            true
        }
        Err(rejection) => {
            debug!(
                candidate,
                reason = rejection.reason(),
                "Shortlink candidate rejected"
            );
            false
        }
    }
}

fn ends_with_ignore_ascii_case(value: &str, suffix: &str) -> bool {
    value.len() >= suffix.len()
        && value.as_bytes()[value.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}
