use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusTagProps {
    /// Tag color name: "green", "red" or "default"
    pub color: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatusTag)]
pub fn status_tag(props: &StatusTagProps) -> Html {
    html! {
        <span class={classes!("tag", format!("tag-{}", props.color))}>
            {props.label.clone()}
        </span>
    }
}
