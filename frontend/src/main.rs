mod components;
mod hooks;
mod services;

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use shared::Route;

use components::header::Header;
use components::positions::PositionManagementView;
use components::side_menu::SideMenu;
use components::teachers::TeacherDirectoryView;
use services::api::ApiClient;
use services::logging::Logger;

/// Route for the browser's current path; unknown paths show the teacher list
fn current_route() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .and_then(|path| Route::from_path(&path))
        .unwrap_or(Route::Teachers)
}

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let route = use_state(current_route);

    // Follow back/forward navigation
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| route.set(current_route()))
            });
            move || drop(listener)
        });
    }

    let on_select = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if *route == next {
                return;
            }
            if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(next.path())) {
                    Logger::warn_with_component("shell", &format!("pushState failed: {:?}", e));
                }
            }
            route.set(next);
        })
    };

    html! {
        <div class="layout">
            <Header />
            <div class="layout-body">
                <SideMenu active={*route} {on_select} />
                <main class="content">
                    {match *route {
                        Route::Teachers => html! {
                            <TeacherDirectoryView api_client={(*api_client).clone()} />
                        },
                        Route::Positions => html! {
                            <PositionManagementView api_client={(*api_client).clone()} />
                        },
                    }}
                </main>
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
