//! Presentation sections of the portfolio page.
//!
//! Every section is a pure function from a [`RenderContext`] (viewport class
//! plus theme) and its own props struct to a [`Markup`] fragment. Sections
//! never look at each other's state; anything width-dependent comes in
//! through the context.
//!
//! Mode-dependent colors are never written inline. Sections reference the
//! theme's CSS custom properties through [`vars`], and the page stylesheet
//! binds those properties per `data-theme` value.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod resume;
pub mod skills;

use maud::{html, Markup};

use crate::branding::ACCENT;
use crate::content::SocialLink;
use crate::theme::ThemeContext;
use crate::viewport::ViewportClass;

pub use about::AboutProps;
pub use contact::{ContactForm, ContactProps, FormStatus};
pub use footer::FooterProps;
pub use hero::HeroProps;
pub use navbar::NavbarProps;
pub use projects::{ProjectsProps, ProjectsState};
pub use resume::ResumeProps;
pub use skills::SkillsProps;

/// `var(--…)` references to the theme's custom properties.
pub(crate) mod vars {
    pub const SECTION_BG_GRADIENT1: &str = "var(--section-bg-gradient1)";
    pub const SECTION_BG_GRADIENT2: &str = "var(--section-bg-gradient2)";
    pub const SECTION_BG_GRADIENT3: &str = "var(--section-bg-gradient3)";
    pub const SECTION_BG_GRADIENT4: &str = "var(--section-bg-gradient4)";
    pub const SECTION_BG_GRADIENT5: &str = "var(--section-bg-gradient5)";
    pub const HERO_BG: &str = "var(--hero-bg)";

    pub const CARD_BG: &str = "var(--card-bg)";
    pub const CARD_BORDER: &str = "var(--card-border)";
    pub const CARD_SHADOW: &str = "var(--card-shadow)";

    pub const GLASS_BORDER: &str = "var(--glass-border)";
    pub const GLASS_BG_STRONG: &str = "var(--glass-bg-strong)";
    pub const GLASS_BG_LIGHT: &str = "var(--glass-bg-light)";

    pub const HEADING: &str = "var(--heading)";
    pub const HEADING_ALT: &str = "var(--heading-alt)";
    pub const TEXT: &str = "var(--text)";
    pub const TEXT_SECONDARY: &str = "var(--text-secondary)";
    pub const TEXT_MUTED: &str = "var(--text-muted)";
    pub const TEXT_LIGHT: &str = "var(--text-light)";
    pub const TEXT_LIGHTER: &str = "var(--text-lighter)";

    pub const NAV_BG: &str = "var(--nav-bg)";
    pub const NAV_BORDER: &str = "var(--nav-border)";
    pub const NAV_LINK: &str = "var(--nav-link)";

    pub const INPUT_BG: &str = "var(--input-bg)";
    pub const INPUT_BORDER: &str = "var(--input-border)";
    pub const BAR_BG: &str = "var(--bar-bg)";

    pub const FOOTER_BG: &str = "var(--footer-bg)";
    pub const FOOTER_TEXT: &str = "var(--footer-text)";
    pub const FOOTER_BORDER: &str = "var(--footer-border)";
    pub const FOOTER_COPYRIGHT: &str = "var(--footer-copyright)";

    pub const SOCIAL_BTN_COLOR: &str = "var(--social-btn-color)";
    pub const SOCIAL_BTN_BORDER: &str = "var(--social-btn-border)";
    pub const TAG_BG: &str = "var(--tag-bg)";
    pub const BADGE_BG: &str = "var(--badge-bg)";
    pub const CIRCULAR_TEXT_FILL: &str = "var(--circular-text-fill)";
    pub const ORB_OPACITY: &str = "var(--orb-opacity)";

    #[cfg(test)]
    pub const ALL: &[&str] = &[
        SECTION_BG_GRADIENT1,
        SECTION_BG_GRADIENT2,
        SECTION_BG_GRADIENT3,
        SECTION_BG_GRADIENT4,
        SECTION_BG_GRADIENT5,
        HERO_BG,
        CARD_BG,
        CARD_BORDER,
        CARD_SHADOW,
        GLASS_BORDER,
        GLASS_BG_STRONG,
        GLASS_BG_LIGHT,
        HEADING,
        HEADING_ALT,
        TEXT,
        TEXT_SECONDARY,
        TEXT_MUTED,
        TEXT_LIGHT,
        TEXT_LIGHTER,
        NAV_BG,
        NAV_BORDER,
        NAV_LINK,
        INPUT_BG,
        INPUT_BORDER,
        BAR_BG,
        FOOTER_BG,
        FOOTER_TEXT,
        FOOTER_BORDER,
        FOOTER_COPYRIGHT,
        SOCIAL_BTN_COLOR,
        SOCIAL_BTN_BORDER,
        TAG_BG,
        BADGE_BG,
        CIRCULAR_TEXT_FILL,
        ORB_OPACITY,
    ];
}

/// Inputs shared by every section.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    /// Responsive classification of the target width
    pub viewport: ViewportClass,
    /// Active theme
    pub theme: ThemeContext,
}

impl RenderContext {
    /// Builds a context.
    #[must_use]
    pub fn new(viewport: ViewportClass, theme: ThemeContext) -> Self {
        Self { viewport, theme }
    }

    /// Outer padding for a full-width section.
    #[must_use]
    pub fn section_padding(&self) -> &'static str {
        if self.viewport.is_mobile {
            "60px 16px"
        } else {
            "100px 60px"
        }
    }

    /// `grid-template-columns` value for a card grid.
    ///
    /// Mobile always collapses to one column.
    #[must_use]
    pub fn grid_columns(&self, tablet: u8, desktop: u8) -> String {
        let columns = self.viewport.pick(1, tablet, desktop);
        format!("repeat({columns}, minmax(0, 1fr))")
    }
}

/// Eyebrow pill, heading and intro shared by content sections.
///
/// `highlight` is appended to `title` in the accent color.
pub(crate) fn section_header(
    eyebrow: &str,
    title: &str,
    highlight: &str,
    intro: Option<&str>,
) -> Markup {
    html! {
        span.eyebrow style={ "background:" (vars::TAG_BG) ";color:" (ACCENT) } { (eyebrow) }
        h2 style={ "color:" (vars::HEADING) } {
            (title) " "
            span style={ "color:" (ACCENT) } { (highlight) }
        }
        @if let Some(intro) = intro {
            p.intro style={ "color:" (vars::TEXT_MUTED) } { (intro) }
        }
    }
}

/// Round social profile buttons, shared by the navbar and footer.
pub(crate) fn social_buttons(socials: &[SocialLink]) -> Markup {
    html! {
        @for social in socials {
            a.social-btn href=(social.href) target="_blank" rel="noopener noreferrer"
                aria-label=(social.kind.label())
                style={ "color:" (vars::SOCIAL_BTN_COLOR) ";border-color:" (vars::SOCIAL_BTN_BORDER) } {
                (social.kind.label())
            }
        }
    }
}

/// A labelled link that opens in a new tab.
pub(crate) fn external_link(href: &str, label: &str) -> Markup {
    html! {
        a href=(href) target="_blank" rel="noopener noreferrer" aria-label=(label) { (label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{AppearanceMode, LIGHT_TOKENS};

    #[test]
    fn test_every_var_names_a_token() {
        for reference in vars::ALL {
            let name = reference
                .strip_prefix("var(--")
                .and_then(|rest| rest.strip_suffix(')'))
                .unwrap_or_else(|| panic!("malformed reference {reference}"));
            assert!(LIGHT_TOKENS.get(name).is_some(), "no token named {name}");
        }
    }

    #[test]
    fn test_grid_columns_by_tier() {
        let theme = ThemeContext::for_mode(AppearanceMode::Light);
        let mobile = RenderContext::new(ViewportClass::from_width(Some(500)), theme);
        let tablet = RenderContext::new(ViewportClass::from_width(Some(900)), theme);
        let desktop = RenderContext::new(ViewportClass::from_width(Some(1400)), theme);

        assert_eq!(mobile.grid_columns(2, 4), "repeat(1, minmax(0, 1fr))");
        assert_eq!(tablet.grid_columns(2, 4), "repeat(2, minmax(0, 1fr))");
        assert_eq!(desktop.grid_columns(2, 4), "repeat(4, minmax(0, 1fr))");
    }

    #[test]
    fn test_section_header() {
        let html = section_header("ABOUT ME", "Passionate about", "building", None).into_string();
        assert!(html.contains("color:var(--heading)"));
        assert!(html.contains("ABOUT ME"));
        assert!(!html.contains("class=\"intro\""));
    }

    #[test]
    fn test_header_text_is_escaped() {
        let html = section_header("<b>", "a & b", "\"c\"", Some("<i>")).into_string();
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;c&quot;"));
        assert!(!html.contains("<i>"));
    }
}
