use std::rc::Rc;

use yew::prelude::*;

use crate::components::layout::Layout;
use crate::content::ContentStore;

#[function_component(Guidelines)]
pub fn guidelines() -> Html {
    match use_context::<Rc<ContentStore>>() {
        Some(content) => html! { <Layout content={content} /> },
        None => html! {},
    }
}
