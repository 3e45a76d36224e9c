use yew::prelude::*;

pub const APP_TITLE: &str = "Hệ thống quản lý giáo viên";

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <h1>{APP_TITLE}</h1>
        </header>
    }
}
