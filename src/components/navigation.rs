use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::content::ContentStore;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub content: Rc<ContentStore>,
    #[prop_or_default]
    pub active: Option<String>,
}

/// Sticky side menu with one numbered link per section.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="side-nav" aria-label="Sections">
            <ul class="side-nav__list">
                { for props.content.sections().iter().enumerate().map(|(index, section)| {
                    let is_active = props.active.as_deref() == Some(section.id.as_str());
                    let onclick = {
                        let id = section.id.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            if !scroll_to_section(&id, ScrollBehavior::Smooth) {
                                warn!("no section `{}` to scroll to", id);
                            }
                        })
                    };

                    html! {
                        <li key={section.id.clone()}>
                            <a
                                href={format!("#{}", section.id)}
                                class={classes!("side-nav__link", is_active.then(|| "active"))}
                                aria-current={is_active.then(|| "true")}
                                onclick={onclick}
                            >
                                { section.numbered_title(index) }
                            </a>
                        </li>
                    }
                }) }
            </ul>
        </nav>
    }
}

/// Brings the section into view and records it in the location hash.
/// Returns false when the section is not rendered.
pub fn scroll_to_section(id: &str, behavior: ScrollBehavior) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|document| document.get_element_by_id(id)) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(behavior);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(format!("#{}", id).as_str()));
    }
    true
}
