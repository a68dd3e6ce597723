//! Landing hero: greeting, headline, intro, calls to action and stats.

use maud::{html, Markup};

use super::{vars, RenderContext};
use crate::branding::{ACCENT, ACCENT_PINK};
use crate::content::Stat;

/// Hero inputs.
#[derive(Debug, Clone)]
pub struct HeroProps<'a> {
    /// Owner's name in the headline
    pub owner_name: &'a str,
    /// Owner's title in the underlined headline line
    pub owner_title: &'a str,
    /// Intro paragraph
    pub intro: &'a str,
    /// Skill tags
    pub tags: &'a [&'a str],
    /// Stats row
    pub stats: &'a [Stat],
    /// Circular badge text
    pub badge_text: &'a str,
    /// Primary call to action target (projects)
    pub projects_href: &'a str,
    /// Secondary call to action target (`tel:` link)
    pub hire_href: &'a str,
}

/// Renders the hero section.
pub fn render(ctx: &RenderContext, props: &HeroProps<'_>) -> Markup {
    let columns = if ctx.viewport.is_single_column() {
        "1fr"
    } else {
        "1.1fr 0.9fr"
    };

    html! {
        section #home .hero style={
            "background:" (vars::HERO_BG) ";padding:" (ctx.section_padding())
            ";display:grid;grid-template-columns:" (columns)
        } {
            // Decorative orbs fade with the theme's orb opacity
            div.orb aria-hidden="true"
                style={ "background:" (ACCENT) ";opacity:calc(0.25 * " (vars::ORB_OPACITY) ")" } {}
            div.orb aria-hidden="true"
                style={ "background:" (ACCENT_PINK) ";opacity:calc(0.2 * " (vars::ORB_OPACITY) ")" } {}

            div.hero-copy {
                span.greeting style={
                    "background:" (vars::BADGE_BG) ";border:1px solid " (vars::GLASS_BORDER)
                    ";color:" (vars::HEADING)
                } { "✱ HELLO, WORLD!" }
                h1 style={ "color:" (vars::HEADING) } {
                    "I'm " (props.owner_name) ","
                    br;
                    span.underlined { "a " (props.owner_title) "." }
                }
                p style={ "color:" (vars::TEXT) } { (props.intro) }
                div.tags {
                    @for tag in props.tags {
                        span.tag style={ "background:" (vars::TAG_BG) ";color:" (ACCENT) } { (tag) }
                    }
                }
                div.cta {
                    a.btn.primary href=(props.projects_href) target="_blank" rel="noopener noreferrer"
                        style={ "background:" (ACCENT) ";border-color:" (ACCENT) ";color:#fff" } {
                        "View My Projects →"
                    }
                    a.btn.outline href=(props.hire_href)
                        style={ "border-color:" (vars::HEADING) ";color:" (vars::HEADING) } {
                        "Hire Me"
                    }
                }
            }

            div.hero-visual {
                div.circular-badge style={
                    "background:" (vars::BADGE_BG) ";color:" (vars::CIRCULAR_TEXT_FILL)
                } { (props.badge_text) }
                div.stats style={
                    "background:" (vars::GLASS_BG_LIGHT) ";border:1px solid " (vars::GLASS_BORDER)
                } {
                    @for stat in props.stats {
                        div.stat {
                            strong style={ "color:" (ACCENT) } { (stat.value) }
                            span style={ "color:" (vars::TEXT_LIGHT) } { (stat.label) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_STATS, HERO_TAGS};
    use crate::theme::{AppearanceMode, ThemeContext};
    use crate::viewport::ViewportClass;

    fn props() -> HeroProps<'static> {
        HeroProps {
            owner_name: "Jo",
            owner_title: "Full Stack Developer",
            intro: "Hello there",
            tags: HERO_TAGS,
            stats: HERO_STATS,
            badge_text: "OPEN TO WORK",
            projects_href: "https://github.com/octocat",
            hire_href: "tel:+100",
        }
    }

    #[test]
    fn test_hero_single_column_on_mobile() {
        let ctx = RenderContext::new(ViewportClass::from_width(Some(500)), ThemeContext::default());
        let html = render(&ctx, &props()).into_string();
        assert!(html.contains("grid-template-columns:1fr\""));
        assert!(html.contains("padding:60px 16px"));
    }

    #[test]
    fn test_hero_two_columns_on_tablet() {
        let ctx = RenderContext::new(ViewportClass::from_width(Some(900)), ThemeContext::default());
        let html = render(&ctx, &props()).into_string();
        assert!(html.contains("grid-template-columns:1.1fr 0.9fr"));
    }

    #[test]
    fn test_hero_content() {
        let ctx = RenderContext::new(
            ViewportClass::default(),
            ThemeContext::for_mode(AppearanceMode::Dark),
        );
        let html = render(&ctx, &props()).into_string();
        assert!(html.contains("I'm Jo,"));
        assert!(html.contains("a Full Stack Developer."));
        assert!(html.contains("10+"));
        assert!(html.contains("Node.js"));
        assert!(html.contains("background:var(--hero-bg)"));
        assert!(html.contains("opacity:calc(0.25 * var(--orb-opacity))"));
    }
}
