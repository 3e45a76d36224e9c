use yew::prelude::*;
use shared::Route;

#[derive(Properties, PartialEq)]
pub struct SideMenuProps {
    pub active: Route,
    pub on_select: Callback<Route>,
}

#[function_component(SideMenu)]
pub fn side_menu(props: &SideMenuProps) -> Html {
    html! {
        <nav class="side-menu">
            <ul>
                {for Route::ALL.iter().map(|route| {
                    let route = *route;
                    let on_select = props.on_select.clone();
                    let icon = match route {
                        Route::Teachers => "👤",
                        Route::Positions => "▦",
                    };
                    html! {
                        <li
                            class={classes!("side-menu-item", (route == props.active).then_some("selected"))}
                            onclick={Callback::from(move |_: MouseEvent| on_select.emit(route))}
                        >
                            <span class="side-menu-icon">{icon}</span>
                            {route.label()}
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
