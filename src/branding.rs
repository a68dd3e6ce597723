//! Branding and site identity configuration.
//!
//! This module centralizes the owner-facing strings (names, handles, URLs) so the
//! site can be re-pointed at a different person by changing values here.

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data (config, preferences).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "folio";

/// Site owner's display name.
///
/// Used in:
/// - Navbar and footer logo
/// - Hero headline
/// - Auto-reply signature
pub const OWNER_NAME: &str = "Ziyaurrahman";

/// Owner's professional title.
pub const OWNER_TITLE: &str = "Full Stack Developer";

/// Owner's location, shown in the hero, about and contact sections.
pub const OWNER_LOCATION: &str = "Jaipur, Rajasthan, India";

/// Public contact email shown on the contact section.
pub const OWNER_EMAIL: &str = "ziyaurrahman457@gmail.com";

/// Public phone number, display form.
pub const OWNER_PHONE_DISPLAY: &str = "+91 91363 41425";

/// Public phone number, `tel:` form.
pub const OWNER_PHONE_TEL: &str = "+919136341425";

/// GitHub username whose public repositories populate the projects section.
pub const GITHUB_USER: &str = "ziyaur-12";

/// Twitter profile URL.
pub const TWITTER_URL: &str = "https://twitter.com/ZiyaurR67059204";

/// Instagram profile URL.
pub const INSTAGRAM_URL: &str = "https://instagram.com/ziyaur786rahman";

/// Brand accent color (indigo).
pub const ACCENT: &str = "#6366F1";

/// Secondary accent (pink) used in gradients.
pub const ACCENT_PINK: &str = "#EC4899";

/// Tertiary accent (cyan) used in gradients.
pub const ACCENT_CYAN: &str = "#06B6D4";

/// Path of the downloadable resume document.
pub const RESUME_PATH: &str = "/resume.pdf";

// ============================================================================
// Derived values (computed from the above)
// ============================================================================

/// GitHub profile URL for a user.
pub fn github_profile_url(user: &str) -> String {
    format!("https://github.com/{user}")
}

/// GitHub repositories tab URL for a user.
pub fn github_repositories_url(user: &str) -> String {
    format!("{}?tab=repositories", github_profile_url(user))
}

/// `mailto:` link for the public contact email.
pub fn owner_mailto() -> String {
    format!("mailto:{OWNER_EMAIL}")
}

/// Map link for the owner's location.
pub fn owner_map_url() -> String {
    let city = OWNER_LOCATION
        .split(", ")
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
        .replace(' ', "+");
    format!("https://maps.google.com/?q={city}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in data dir
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(OWNER_EMAIL.contains('@'));
        assert!(ACCENT.starts_with('#'));
    }

    #[test]
    fn test_derived_urls() {
        assert_eq!(github_profile_url("octocat"), "https://github.com/octocat");
        assert_eq!(
            github_repositories_url("octocat"),
            "https://github.com/octocat?tab=repositories"
        );
        assert_eq!(owner_mailto(), format!("mailto:{OWNER_EMAIL}"));
    }

    #[test]
    fn test_owner_map_url() {
        assert_eq!(
            owner_map_url(),
            "https://maps.google.com/?q=Jaipur+Rajasthan"
        );
    }
}
