use yew::prelude::*;
use shared::teacher_screen::{highest_degree, TeacherStatus, DEPARTMENT_PLACEHOLDER};
use shared::Teacher;

use crate::components::status_tag::StatusTag;

#[derive(Properties, PartialEq)]
pub struct TeacherTableProps {
    pub teachers: Vec<Teacher>,
    pub loading: bool,
}

#[function_component(TeacherTable)]
pub fn teacher_table(props: &TeacherTableProps) -> Html {
    html! {
        <div class={classes!("table-container", props.loading.then_some("loading"))}>
            {if props.loading {
                html! { <div class="table-spinner">{"Đang tải..."}</div> }
            } else {
                html! {}
            }}
            <table class="data-table teacher-table">
                <thead>
                    <tr>
                        <th>{"Mã"}</th>
                        <th>{"Giáo viên"}</th>
                        <th>{"Trình độ (cao nhất)"}</th>
                        <th>{"Bộ môn"}</th>
                        <th>{"TT Công tác"}</th>
                        <th>{"Địa chỉ"}</th>
                        <th>{"Trạng thái"}</th>
                        <th>{"Hành động"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.teachers.is_empty() {
                        html! { <tr><td class="empty" colspan="8">{"Không có dữ liệu"}</td></tr> }
                    } else {
                        html! { for props.teachers.iter().map(teacher_row) }
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn teacher_row(teacher: &Teacher) -> Html {
    let status = TeacherStatus::from_label(&teacher.status_label);

    html! {
        <tr key={teacher.id.clone()}>
            <td class="code">{&teacher.code}</td>
            <td>
                <div class="identity-cell">
                    <span class="avatar">{"👤"}</span>
                    <div>
                        <div class="identity-name">{&teacher.name}</div>
                        <div class="identity-sub">{&teacher.email}</div>
                        <div class="identity-sub">{&teacher.phone}</div>
                    </div>
                </div>
            </td>
            <td>
                {match highest_degree(teacher) {
                    Some(degree) => html! {
                        <div>
                            <div><strong>{"Bậc:"}</strong>{" "}{&degree.level}</div>
                            <div><strong>{"Chuyên ngành:"}</strong>{" "}{&degree.major}</div>
                        </div>
                    },
                    None => html! { <span>{"N/A"}</span> },
                }}
            </td>
            <td><span>{DEPARTMENT_PLACEHOLDER}</span></td>
            <td>{&teacher.position_label}</td>
            <td>{&teacher.address}</td>
            <td><StatusTag color={status.color()} label={status.label()} /></td>
            <td>
                // No detail view exists yet
                <button type="button" class="btn-link">{"⋯ Chi tiết"}</button>
            </td>
        </tr>
    }
}
