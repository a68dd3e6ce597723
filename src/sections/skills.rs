//! Skills section: categories of skills with proficiency bars.

use maud::{html, Markup};

use super::{section_header, vars, RenderContext};
use crate::branding::{ACCENT, ACCENT_PINK};
use crate::content::SkillCategory;

/// Skills inputs.
#[derive(Debug, Clone)]
pub struct SkillsProps<'a> {
    /// Intro under the heading
    pub intro: &'a str,
    /// Categories in display order
    pub categories: &'a [SkillCategory],
}

/// Renders the skills section.
pub fn render(ctx: &RenderContext, props: &SkillsProps<'_>) -> Markup {
    html! {
        section #skills style={
            "background:" (vars::SECTION_BG_GRADIENT2) ";padding:" (ctx.section_padding())
        } {
            (section_header("MY SKILLS", "Technologies I", "work with", Some(props.intro)))
            div.grid style={ "grid-template-columns:" (ctx.grid_columns(2, 2)) } {
                @for category in props.categories {
                    div.card style={
                        "background:" (vars::CARD_BG) ";border:1px solid " (vars::CARD_BORDER)
                    } {
                        h3 style={ "color:" (vars::HEADING) } { (category.title) }
                        @for skill in category.skills {
                            @let level = skill.level.min(100);
                            div.skill {
                                div.skill-label {
                                    span style={ "color:" (vars::HEADING_ALT) } { (skill.name) }
                                    span style={ "color:" (vars::TEXT_LIGHTER) } { (level) "%" }
                                }
                                div.bar style={ "background:" (vars::BAR_BG) } role="progressbar"
                                    aria-valuenow=(level) aria-valuemin="0" aria-valuemax="100" {
                                    div style={
                                        "width:" (level) "%;background:linear-gradient(90deg, "
                                        (ACCENT) ", " (ACCENT_PINK) ")"
                                    } {}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
