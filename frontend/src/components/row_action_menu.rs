use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RowActionMenuProps {
    /// Menu entries as (label, danger)
    pub items: Vec<(AttrValue, bool)>,
}

/// The "⋯" row menu. Entries have no backing operation yet, so choosing
/// one only closes the menu.
#[function_component(RowActionMenu)]
pub fn row_action_menu(props: &RowActionMenuProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            is_open.set(!*is_open);
        })
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    html! {
        <div class="row-action-menu">
            <button type="button" class="btn-text" onclick={toggle}>{"⋯"}</button>
            {if *is_open {
                html! {
                    <ul class="row-action-items">
                        {for props.items.iter().map(|(label, danger)| html! {
                            <li
                                class={classes!("row-action-item", danger.then_some("danger"))}
                                onclick={close.clone()}
                            >
                                {label.clone()}
                            </li>
                        })}
                    </ul>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
