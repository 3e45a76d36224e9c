use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::teacher_screen::TeacherAction;
use shared::PageState;

use super::teacher_form::TeacherForm;
use super::teacher_table::TeacherTable;
use crate::components::drawer::Drawer;
use crate::components::notice_banner::NoticeBanner;
use crate::components::pagination_bar::PaginationBar;
use crate::hooks::use_teacher_directory::use_teacher_directory;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TeacherDirectoryViewProps {
    pub api_client: ApiClient,
}

/// The teacher list screen: table, pagination and the creation drawer
#[function_component(TeacherDirectoryView)]
pub fn teacher_directory_view(props: &TeacherDirectoryViewProps) -> Html {
    let directory = use_teacher_directory(&props.api_client);
    let state = &directory.state;
    let actions = &directory.actions;

    let on_search_input = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(TeacherAction::SearchChanged(input.value()));
        })
    };

    let on_reload = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let on_open_drawer = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(TeacherAction::OpenDrawer))
    };

    let on_close_drawer = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(TeacherAction::CloseDrawer))
    };

    let on_page_change = {
        let load_page = actions.load_page.clone();
        Callback::from(move |page: PageState| load_page.emit(page.query()))
    };

    html! {
        <div class="screen">
            <NoticeBanner notice={state.notices.current().cloned()} />
            <div class="card">
                <div class="card-toolbar">
                    <h2>{"Danh sách giáo viên"}</h2>
                    <div class="toolbar-actions">
                        <input
                            type="search"
                            class="input search-input"
                            placeholder="Tìm kiếm thông tin"
                            value={state.search_text.clone()}
                            oninput={on_search_input}
                        />
                        <button type="button" class="btn" onclick={on_reload}>{"⟳ Tải lại"}</button>
                        <button type="button" class="btn btn-primary" onclick={on_open_drawer}>
                            {"+ Tạo mới"}
                        </button>
                    </div>
                </div>

                <TeacherTable teachers={state.teachers.clone()} loading={state.is_loading()} />
                <PaginationBar
                    page={state.page}
                    disabled={state.is_loading()}
                    on_change={on_page_change}
                />
            </div>

            <Drawer
                title="Tạo thông tin giáo viên"
                is_open={state.drawer_open}
                width={700}
                on_close={on_close_drawer}
            >
                <TeacherForm
                    form={state.form.clone()}
                    errors={state.errors.clone()}
                    position_options={state.position_options.clone()}
                    submitting={state.submitting}
                    dispatch={actions.dispatch.clone()}
                    on_submit={actions.submit.clone()}
                />
            </Drawer>
        </div>
    }
}
