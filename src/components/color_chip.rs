use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ColorChipProps {
    pub name: String,
    pub hex: String,
}

#[function_component(ColorChip)]
pub fn color_chip(props: &ColorChipProps) -> Html {
    html! {
        <div class="color-chip">
            <div class="color-chip__swatch" style={format!("background-color: {};", props.hex)}></div>
            <span class="color-chip__label">{ format!("{} — {}", props.name, props.hex) }</span>
        </div>
    }
}
