use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(H1)]
pub fn h1(props: &TextProps) -> Html {
    html! {
        <h1 class="text-h1">{ for props.children.iter() }</h1>
    }
}

#[function_component(H2)]
pub fn h2(props: &TextProps) -> Html {
    html! {
        <h2 class="text-h2">{ for props.children.iter() }</h2>
    }
}

#[function_component(Body)]
pub fn body(props: &TextProps) -> Html {
    html! {
        <p class="text-body">{ for props.children.iter() }</p>
    }
}
