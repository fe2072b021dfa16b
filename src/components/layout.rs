use std::rc::Rc;

use log::debug;
use web_sys::ScrollBehavior;
use yew::prelude::*;

use crate::components::navigation::{scroll_to_section, Navigation};
use crate::components::section::SectionView;
use crate::components::typography::H1;
use crate::config;
use crate::content::ContentStore;
use crate::tracker::use_active_section;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub content: Rc<ContentStore>,
    #[prop_or(config::INTERSECTION_THRESHOLD)]
    pub threshold: f64,
}

/// Scrollable document of all sections with the navigation alongside.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let ids = use_memo(
        |content: &Rc<ContentStore>| content.ids().map(str::to_owned).collect::<Vec<_>>(),
        props.content.clone(),
    );
    let active = use_active_section(ids, props.threshold);

    // The splash delays mounting, so the browser's own anchor jump has already
    // happened by now. Repeat it for deep links.
    {
        use_effect_with_deps(
            move |content: &Rc<ContentStore>| {
                let hash = web_sys::window()
                    .and_then(|window| window.location().hash().ok())
                    .unwrap_or_default();
                if let Some(section) = content.resolve_anchor(&hash) {
                    debug!("jumping to linked section `{}`", section.id);
                    scroll_to_section(&section.id, ScrollBehavior::Instant);
                }
                || ()
            },
            props.content.clone(),
        );
    }

    html! {
        <div class="guide">
            <main class="guide__main">
                <header class="guide__header">
                    <H1>{ props.content.title() }</H1>
                </header>
                { for props.content.sections().iter().enumerate().map(|(index, section)| html! {
                    <SectionView key={section.id.clone()} section={section.clone()} index={index} />
                }) }
            </main>

            <Navigation content={props.content.clone()} active={active} />

            <style>
                {r#"
                .guide {
                    display: flex;
                    min-height: 100vh;
                }

                .guide__main {
                    width: 80%;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 2rem;
                    box-sizing: border-box;
                }

                .guide__header {
                    margin-bottom: 3rem;
                }

                .text-h1 {
                    margin: 0;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #5C3C80;
                }

                .guide-section {
                    margin-bottom: 5rem;
                    animation: fadeUp 0.6s ease-out both;
                }

                .guide-section__title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #5C3C80;
                }

                .guide-section__body > * + * {
                    margin-top: 1.5rem;
                }

                .text-h2 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    color: #96397C;
                }

                .text-body {
                    font-size: 1rem;
                    line-height: 1.625;
                    color: #374151;
                }

                .checklist {
                    list-style: none;
                    padding: 0;
                }

                .checklist li {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }

                .checklist__dot {
                    flex-shrink: 0;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #96397C;
                }

                .color-chip {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .color-chip__swatch {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid #e5e7eb;
                }

                .color-chip__label {
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .side-nav {
                    position: sticky;
                    top: 0;
                    width: 20%;
                    height: 100vh;
                    padding: 1.5rem;
                    box-sizing: border-box;
                    border-left: 1px solid #e5e7eb;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .side-nav__list {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: flex-end;
                    height: 100%;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    text-align: right;
                }

                .side-nav__list li + li {
                    margin-top: 1rem;
                }

                .side-nav__link {
                    font-weight: 600;
                    color: #374151;
                    text-decoration: none;
                    transition: color 0.2s;
                }

                .side-nav__link:hover,
                .side-nav__link.active {
                    color: #9333ea;
                }

                @media (max-width: 768px) {
                    .guide__main {
                        width: 100%;
                    }

                    .side-nav {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
