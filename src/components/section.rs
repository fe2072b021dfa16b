use yew::prelude::*;

use crate::components::animated_logo::AnimatedLogo;
use crate::components::checklist::Checklist;
use crate::components::color_chip::ColorChip;
use crate::components::typography::{Body, H2};
use crate::content::{Block, Section};

#[derive(Properties, PartialEq)]
pub struct SectionViewProps {
    pub section: Section,
    pub index: usize,
}

#[function_component(SectionView)]
pub fn section_view(props: &SectionViewProps) -> Html {
    let section = &props.section;
    // Later sections start their entrance a little after earlier ones
    let style = format!("animation-delay: {:.2}s;", props.index.min(3) as f64 * 0.15);

    html! {
        <section id={section.id.clone()} class="guide-section" style={style}>
            <h2 class="guide-section__title">{ section.numbered_title(props.index) }</h2>
            <div class="guide-section__body">
                { for section.blocks.iter().map(render_block) }
            </div>
        </section>
    }
}

fn render_block(block: &Block) -> Html {
    match block {
        Block::Heading { text } => html! { <H2>{ text }</H2> },
        Block::Paragraph { lead: Some(lead), text } => html! {
            <Body>
                <strong>{ format!("{}:", lead) }</strong>
                { " " }
                { text }
            </Body>
        },
        Block::Paragraph { lead: None, text } => html! { <Body>{ text }</Body> },
        Block::Checklist { items } => html! { <Checklist items={items.clone()} /> },
        Block::Swatch { name, hex } => html! { <ColorChip name={name.clone()} hex={hex.clone()} /> },
        Block::Logo => html! { <AnimatedLogo width={160} /> },
    }
}
