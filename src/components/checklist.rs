use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChecklistProps {
    pub items: Vec<String>,
}

#[function_component(Checklist)]
pub fn checklist(props: &ChecklistProps) -> Html {
    html! {
        <ul class="checklist">
            { for props.items.iter().enumerate().map(|(i, item)| html! {
                <li key={i}>
                    <span class="checklist__dot"></span>
                    <span>{ item }</span>
                </li>
            }) }
        </ul>
    }
}
