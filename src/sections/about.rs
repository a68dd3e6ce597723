//! About section with highlight cards.

use maud::{html, Markup};

use super::{section_header, vars, RenderContext};
use crate::content::Highlight;

/// About inputs.
#[derive(Debug, Clone)]
pub struct AboutProps<'a> {
    /// Owner's name, bolded in the blurb lead-in
    pub owner_name: &'a str,
    /// Owner's location, bolded in the blurb lead-in
    pub location: &'a str,
    /// Blurb paragraph
    pub blurb: &'a str,
    /// Highlight cards
    pub highlights: &'a [Highlight],
}

/// Renders the about section.
pub fn render(ctx: &RenderContext, props: &AboutProps<'_>) -> Markup {
    html! {
        section #about style={
            "background:" (vars::SECTION_BG_GRADIENT1) ";padding:" (ctx.section_padding())
        } {
            (section_header("ABOUT ME", "Passionate about building", "great software", None))
            p.intro style={ "color:" (vars::TEXT_SECONDARY) } {
                "I'm " strong { (props.owner_name) } ", an engineering student from "
                strong { (props.location) } ". " (props.blurb)
            }
            div.grid style={ "grid-template-columns:" (ctx.grid_columns(2, 4)) } {
                @for highlight in props.highlights {
                    div.card style={
                        "background:" (vars::CARD_BG) ";border:1px solid " (vars::CARD_BORDER)
                        ";box-shadow:" (vars::CARD_SHADOW)
                    } {
                        h3 style={ "color:" (vars::HEADING) } { (highlight.title) }
                        p style={ "color:" (vars::TEXT_MUTED) } { (highlight.description) }
                    }
                }
            }
        }
    }
}
