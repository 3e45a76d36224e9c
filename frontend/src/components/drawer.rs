use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct DrawerProps {
    pub title: AttrValue,
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// Panel width in pixels
    #[prop_or(500)]
    pub width: u32,
    #[prop_or_default]
    pub children: Html,
}

/// Right-hand slide-in panel hosting a creation form
#[function_component(Drawer)]
pub fn drawer(props: &DrawerProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_panel_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="drawer-backdrop" onclick={on_backdrop_click}>
            <aside
                class="drawer"
                style={format!("width: {}px", props.width)}
                onclick={on_panel_click}
            >
                <div class="drawer-header">
                    <button type="button" class="drawer-close" onclick={on_close_click}>{"×"}</button>
                    <h3 class="drawer-title">{props.title.clone()}</h3>
                </div>
                <div class="drawer-body">
                    {props.children.clone()}
                </div>
            </aside>
        </div>
    }
}
