use yew::prelude::*;
use shared::position_screen::{sequence_number, PositionStatusTag};
use shared::Position;

use crate::components::row_action_menu::RowActionMenu;
use crate::components::status_tag::StatusTag;

#[derive(Properties, PartialEq)]
pub struct PositionTableProps {
    pub positions: Vec<Position>,
    pub loading: bool,
}

#[function_component(PositionTable)]
pub fn position_table(props: &PositionTableProps) -> Html {
    let menu_items: Vec<(AttrValue, bool)> = vec![
        ("Chỉnh sửa".into(), false),
        ("Xóa".into(), true),
    ];

    html! {
        <div class={classes!("table-container", props.loading.then_some("loading"))}>
            {if props.loading {
                html! { <div class="table-spinner">{"Đang tải..."}</div> }
            } else {
                html! {}
            }}
            <table class="data-table position-table">
                <thead>
                    <tr>
                        <th class="col-seq">{"STT"}</th>
                        <th>{"Mã"}</th>
                        <th>{"Tên"}</th>
                        <th>{"Trạng thái"}</th>
                        <th>{"Mô tả"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {if props.positions.is_empty() {
                        html! { <tr><td class="empty" colspan="6">{"Không có dữ liệu"}</td></tr> }
                    } else {
                        html! {
                            for props.positions.iter().enumerate().map(|(index, position)| {
                                let tag = PositionStatusTag::for_flag(position.is_active);
                                html! {
                                    <tr key={position.id.clone()}>
                                        <td class="col-seq">{sequence_number(index)}</td>
                                        <td>{&position.code}</td>
                                        <td>{&position.name}</td>
                                        <td><StatusTag color={tag.color} label={tag.label} /></td>
                                        <td>{&position.description}</td>
                                        <td><RowActionMenu items={menu_items.clone()} /></td>
                                    </tr>
                                }
                            })
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
