use yew::prelude::*;
use shared::position_screen::PositionAction;

use super::position_form::PositionForm;
use super::position_table::PositionTable;
use crate::components::drawer::Drawer;
use crate::components::notice_banner::NoticeBanner;
use crate::hooks::use_position_management::use_position_management;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct PositionManagementViewProps {
    pub api_client: ApiClient,
}

#[function_component(PositionManagementView)]
pub fn position_management_view(props: &PositionManagementViewProps) -> Html {
    let management = use_position_management(&props.api_client);
    let state = &management.state;
    let actions = &management.actions;

    let on_refresh = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let on_open_drawer = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(PositionAction::OpenDrawer))
    };

    let on_close_drawer = {
        let dispatch = actions.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(PositionAction::CloseDrawer))
    };

    html! {
        <div class="screen">
            <NoticeBanner notice={state.notices.current().cloned()} />
            <div class="card">
                <div class="card-toolbar">
                    <h2>{"Danh sách vị trí làm việc (công tác) của giáo viên"}</h2>
                    <div class="toolbar-actions">
                        <button type="button" class="btn" onclick={on_refresh}>{"⟳ Làm mới"}</button>
                        <button type="button" class="btn btn-primary" onclick={on_open_drawer}>
                            {"+ Tạo"}
                        </button>
                    </div>
                </div>

                <PositionTable positions={state.positions.clone()} loading={state.is_loading()} />
            </div>

            <Drawer title="Vị trí công tác" is_open={state.drawer_open} on_close={on_close_drawer}>
                <PositionForm
                    form={state.form.clone()}
                    errors={state.errors.clone()}
                    submitting={state.submitting}
                    dispatch={actions.dispatch.clone()}
                    on_submit={actions.submit.clone()}
                />
            </Drawer>
        </div>
    }
}
