//! Semantic style tokens for the light and dark appearance.
//!
//! Sections never hard-code mode-dependent colors; they reference the tokens
//! as CSS custom properties, which the page binds from these sets. Both sets
//! share one struct type, so a token added to one set cannot be missing from
//! the other.

use std::fmt;

/// A single token value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    /// Any CSS value: color, gradient, shadow
    Css(&'static str),
    /// Opacity-like scalar
    Scalar(f32),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(value) => f.write_str(value),
            Self::Scalar(value) => write!(f, "{value}"),
        }
    }
}

/// Named style values consumed by the presentation sections.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTokens {
    // Section backgrounds
    /// Default section background
    pub section_bg: &'static str,
    /// Alternate section background
    pub section_bg_alt: &'static str,
    /// About section gradient
    pub section_bg_gradient1: &'static str,
    /// Skills section gradient
    pub section_bg_gradient2: &'static str,
    /// Projects section gradient
    pub section_bg_gradient3: &'static str,
    /// Contact section gradient
    pub section_bg_gradient4: &'static str,
    /// Resume section gradient
    pub section_bg_gradient5: &'static str,
    /// Hero background
    pub hero_bg: &'static str,

    // Card
    /// Card background
    pub card_bg: &'static str,
    /// Card border color
    pub card_border: &'static str,
    /// Card box shadow
    pub card_shadow: &'static str,

    // Glass
    /// Frosted panel background
    pub glass_bg: &'static str,
    /// Frosted panel border
    pub glass_border: &'static str,
    /// Denser frosted background
    pub glass_bg_strong: &'static str,
    /// Densest frosted background
    pub glass_bg_light: &'static str,

    // Text
    /// Primary headings
    pub heading: &'static str,
    /// Secondary headings
    pub heading_alt: &'static str,
    /// Body text
    pub text: &'static str,
    /// Secondary body text
    pub text_secondary: &'static str,
    /// Muted text
    pub text_muted: &'static str,
    /// Light captions
    pub text_light: &'static str,
    /// Lightest captions
    pub text_lighter: &'static str,

    // Navbar
    /// Navbar background
    pub nav_bg: &'static str,
    /// Navbar bottom border
    pub nav_border: &'static str,
    /// Navbar link color
    pub nav_link: &'static str,

    // Inputs
    /// Form input background
    pub input_bg: &'static str,
    /// Form input border
    pub input_border: &'static str,

    // Progress bars / dividers
    /// Skill bar track
    pub bar_bg: &'static str,
    /// Horizontal rules
    pub divider: &'static str,

    // Footer
    /// Footer background
    pub footer_bg: &'static str,
    /// Footer text
    pub footer_text: &'static str,
    /// Footer separator
    pub footer_border: &'static str,
    /// Copyright line
    pub footer_copyright: &'static str,

    // Misc
    /// Social button icon color
    pub social_btn_color: &'static str,
    /// Social button border
    pub social_btn_border: &'static str,
    /// Tag pill background
    pub tag_bg: &'static str,
    /// Floating badge background
    pub badge_bg: &'static str,
    /// Circular badge text fill
    pub circular_text_fill: &'static str,
    /// Scrollbar track
    pub scrollbar_track: &'static str,

    // Background decoration
    /// Background orb opacity
    pub orb_opacity: f32,
    /// Multiplier applied to decoration opacities
    pub decor_opacity_multiplier: f32,
}

impl StyleTokens {
    /// Lists every token as `(kebab-case name, value)` in declaration order.
    ///
    /// The names double as CSS custom property names (`--{name}`).
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, TokenValue)> {
        use TokenValue::{Css, Scalar};

        vec![
            ("section-bg", Css(self.section_bg)),
            ("section-bg-alt", Css(self.section_bg_alt)),
            ("section-bg-gradient1", Css(self.section_bg_gradient1)),
            ("section-bg-gradient2", Css(self.section_bg_gradient2)),
            ("section-bg-gradient3", Css(self.section_bg_gradient3)),
            ("section-bg-gradient4", Css(self.section_bg_gradient4)),
            ("section-bg-gradient5", Css(self.section_bg_gradient5)),
            ("hero-bg", Css(self.hero_bg)),
            ("card-bg", Css(self.card_bg)),
            ("card-border", Css(self.card_border)),
            ("card-shadow", Css(self.card_shadow)),
            ("glass-bg", Css(self.glass_bg)),
            ("glass-border", Css(self.glass_border)),
            ("glass-bg-strong", Css(self.glass_bg_strong)),
            ("glass-bg-light", Css(self.glass_bg_light)),
            ("heading", Css(self.heading)),
            ("heading-alt", Css(self.heading_alt)),
            ("text", Css(self.text)),
            ("text-secondary", Css(self.text_secondary)),
            ("text-muted", Css(self.text_muted)),
            ("text-light", Css(self.text_light)),
            ("text-lighter", Css(self.text_lighter)),
            ("nav-bg", Css(self.nav_bg)),
            ("nav-border", Css(self.nav_border)),
            ("nav-link", Css(self.nav_link)),
            ("input-bg", Css(self.input_bg)),
            ("input-border", Css(self.input_border)),
            ("bar-bg", Css(self.bar_bg)),
            ("divider", Css(self.divider)),
            ("footer-bg", Css(self.footer_bg)),
            ("footer-text", Css(self.footer_text)),
            ("footer-border", Css(self.footer_border)),
            ("footer-copyright", Css(self.footer_copyright)),
            ("social-btn-color", Css(self.social_btn_color)),
            ("social-btn-border", Css(self.social_btn_border)),
            ("tag-bg", Css(self.tag_bg)),
            ("badge-bg", Css(self.badge_bg)),
            ("circular-text-fill", Css(self.circular_text_fill)),
            ("scrollbar-track", Css(self.scrollbar_track)),
            ("orb-opacity", Scalar(self.orb_opacity)),
            ("decor-opacity-multiplier", Scalar(self.decor_opacity_multiplier)),
        ]
    }

    /// Looks up a token by its kebab-case name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TokenValue> {
        self.entries()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }
}

/// Tokens for the light appearance.
pub static LIGHT_TOKENS: StyleTokens = StyleTokens {
    section_bg: "#fff",
    section_bg_alt: "#FAFAFF",
    section_bg_gradient1: "linear-gradient(180deg, #fff 0%, #FAFAFF 50%, #F5F3FF 100%)",
    section_bg_gradient2: "linear-gradient(180deg, #FAFAFF 0%, #F5F3FF 100%)",
    section_bg_gradient3: "linear-gradient(180deg, #fff 0%, #FAFAFF 100%)",
    section_bg_gradient4: "linear-gradient(180deg, #FAFAFF 0%, #EEF2FF 50%, #FCE7F3 100%)",
    section_bg_gradient5: "linear-gradient(180deg, #FAFAFF 0%, #FCE7F3 50%, #E0F2FE 100%)",
    hero_bg: "linear-gradient(135deg, #E8E3FF 0%, #FCE7F3 30%, #E0F2FE 60%, #EEF2FF 100%)",

    card_bg: "#fff",
    card_border: "#F0F0F0",
    card_shadow: "0 2px 12px rgba(0,0,0,0.04)",

    glass_bg: "rgba(255,255,255,0.8)",
    glass_border: "rgba(255,255,255,0.5)",
    glass_bg_strong: "rgba(255,255,255,0.85)",
    glass_bg_light: "rgba(255,255,255,0.9)",

    heading: "#000",
    heading_alt: "#111",
    text: "#444",
    text_secondary: "#555",
    text_muted: "#666",
    text_light: "#888",
    text_lighter: "#999",

    nav_bg: "rgba(255,255,255,0.8)",
    nav_border: "rgba(99,102,241,0.1)",
    nav_link: "#444",

    input_bg: "#FAFAFF",
    input_border: "#E0E0E0",

    bar_bg: "#F0F0F0",
    divider: "#F0F0F0",

    // The footer stays dark in both modes
    footer_bg: "linear-gradient(180deg, #111118 0%, #0F0F0F 100%)",
    footer_text: "#999",
    footer_border: "#333",
    footer_copyright: "#666",

    social_btn_color: "#555",
    social_btn_border: "rgba(99,102,241,0.3)",
    tag_bg: "rgba(99,102,241,0.08)",
    badge_bg: "rgba(255,255,255,0.8)",
    circular_text_fill: "#000",
    scrollbar_track: "#F5F5F5",

    orb_opacity: 1.0,
    decor_opacity_multiplier: 1.0,
};

/// Tokens for the dark appearance.
pub static DARK_TOKENS: StyleTokens = StyleTokens {
    section_bg: "#0D0D14",
    section_bg_alt: "#111118",
    section_bg_gradient1: "linear-gradient(180deg, #0D0D14 0%, #111118 50%, #13131F 100%)",
    section_bg_gradient2: "linear-gradient(180deg, #111118 0%, #13131F 100%)",
    section_bg_gradient3: "linear-gradient(180deg, #0D0D14 0%, #111118 100%)",
    section_bg_gradient4: "linear-gradient(180deg, #111118 0%, #15101E 50%, #101318 100%)",
    section_bg_gradient5: "linear-gradient(180deg, #111118 0%, #15101E 50%, #0E1318 100%)",
    hero_bg: "linear-gradient(135deg, #13111F 0%, #1A1020 30%, #0E1318 60%, #111118 100%)",

    card_bg: "#1A1A24",
    card_border: "#2A2A36",
    card_shadow: "0 2px 12px rgba(0,0,0,0.3)",

    glass_bg: "rgba(26,26,36,0.85)",
    glass_border: "rgba(255,255,255,0.08)",
    glass_bg_strong: "rgba(26,26,36,0.9)",
    glass_bg_light: "rgba(26,26,36,0.95)",

    heading: "#F0F0F5",
    heading_alt: "#E8E8F0",
    text: "#B8B8C8",
    text_secondary: "#A0A0B0",
    text_muted: "#8888A0",
    text_light: "#707088",
    text_lighter: "#606078",

    nav_bg: "rgba(13,13,20,0.85)",
    nav_border: "rgba(99,102,241,0.15)",
    nav_link: "#B8B8C8",

    input_bg: "#1A1A24",
    input_border: "#2A2A36",

    bar_bg: "#2A2A36",
    divider: "#2A2A36",

    footer_bg: "linear-gradient(180deg, #080810 0%, #050508 100%)",
    footer_text: "#888",
    footer_border: "#222",
    footer_copyright: "#555",

    social_btn_color: "#999",
    social_btn_border: "rgba(99,102,241,0.4)",
    tag_bg: "rgba(99,102,241,0.15)",
    badge_bg: "rgba(26,26,36,0.85)",
    circular_text_fill: "#E8E8F0",
    scrollbar_track: "#111118",

    orb_opacity: 0.6,
    decor_opacity_multiplier: 0.7,
};
