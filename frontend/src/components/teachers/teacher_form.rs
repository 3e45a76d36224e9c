use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlOptionElement, HtmlSelectElement};
use shared::dates::display_date;
use shared::teacher_screen::{TeacherAction, TeacherField, TeacherForm as TeacherDraft};
use shared::validation::FormErrors;
use shared::Position;

use super::degree_table::DegreeTable;

#[derive(Properties, PartialEq)]
pub struct TeacherFormProps {
    pub form: TeacherDraft,
    pub errors: FormErrors<TeacherField>,
    pub position_options: Vec<Position>,
    pub submitting: bool,
    pub dispatch: Callback<TeacherAction>,
    pub on_submit: Callback<()>,
}

/// Layout of one text/date input row
struct InputSpec {
    field: TeacherField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    required: bool,
}

const PERSONAL_INPUTS: &[InputSpec] = &[
    InputSpec { field: TeacherField::Name, label: "Họ và tên", input_type: "text", placeholder: "VD: Nguyễn Văn A", required: true },
    InputSpec { field: TeacherField::Dob, label: "Ngày sinh", input_type: "date", placeholder: "Chọn ngày sinh", required: true },
    InputSpec { field: TeacherField::Phone, label: "Số điện thoại", input_type: "tel", placeholder: "Nhập số điện thoại", required: true },
    InputSpec { field: TeacherField::Email, label: "Email", input_type: "email", placeholder: "example@school.edu.vn", required: true },
    InputSpec { field: TeacherField::Identity, label: "Số CCCD", input_type: "text", placeholder: "Nhập số CCCD", required: true },
    InputSpec { field: TeacherField::Address, label: "Địa chỉ", input_type: "text", placeholder: "Địa chỉ thường trú", required: true },
];

const EMPLOYMENT_DATES: &[InputSpec] = &[
    InputSpec { field: TeacherField::StartDate, label: "Ngày bắt đầu công tác", input_type: "date", placeholder: "", required: true },
    InputSpec { field: TeacherField::EndDate, label: "Ngày kết thúc công tác", input_type: "date", placeholder: "", required: false },
];

#[function_component(TeacherForm)]
pub fn teacher_form(props: &TeacherFormProps) -> Html {
    let render_input = |spec: &InputSpec| {
        let field = spec.field;
        let value = props.form.value(field).to_string();
        let oninput = {
            let dispatch = props.dispatch.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                dispatch.emit(TeacherAction::FieldChanged(field, input.value()));
            })
        };
        let error = props.errors.get(field);

        html! {
            <div class={classes!("form-item", error.is_some().then_some("has-error"))}>
                <label class={classes!(spec.required.then_some("required"))}>{spec.label}</label>
                <input
                    type={spec.input_type}
                    class="input"
                    placeholder={spec.placeholder}
                    value={value.clone()}
                    disabled={props.submitting}
                    {oninput}
                />
                {if spec.input_type == "date" && !value.is_empty() {
                    html! { <span class="date-preview">{display_date(&value)}</span> }
                } else {
                    html! {}
                }}
                {if let Some(message) = error {
                    html! { <div class="form-error">{message}</div> }
                } else {
                    html! {}
                }}
            </div>
        }
    };

    let on_positions_change = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let options = select.selected_options();
            let ids = (0..options.length())
                .filter_map(|i| options.item(i))
                .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
                .map(|option| option.value())
                .collect();
            dispatch.emit(TeacherAction::PositionsSelected(ids));
        })
    };

    let on_active_change = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(TeacherAction::ActiveToggled(input.checked()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="form form-vertical" {onsubmit} novalidate=true>
            <section class="form-section">
                <h3>{"Thông tin cá nhân"}</h3>
                <div class="avatar-upload">
                    <span class="avatar avatar-large">{"👤"}</span>
                    // Upload is not wired to any endpoint
                    <button type="button" class="btn-link">{"Upload file"}</button>
                    <div class="hint">{"Chọn ảnh"}</div>
                </div>
                {for PERSONAL_INPUTS.iter().map(&render_input)}
            </section>

            <hr class="divider" />

            <section class="form-section">
                <h3>{"Thông tin công tác"}</h3>
                <div class="form-item">
                    <label>{"Vị trí công tác"}</label>
                    <select
                        class="input"
                        multiple=true
                        disabled={props.submitting}
                        onchange={on_positions_change}
                    >
                        {for props.position_options.iter().map(|position| html! {
                            <option
                                key={position.id.clone()}
                                value={position.id.clone()}
                                selected={props.form.positions.contains(&position.id)}
                            >
                                {&position.name}
                            </option>
                        })}
                    </select>
                    <div class="hint">{"Chọn các vị trí công tác"}</div>
                </div>
                {for EMPLOYMENT_DATES.iter().map(&render_input)}
                <div class="form-item">
                    <label>{"Trạng thái hoạt động"}</label>
                    <label class="switch">
                        <input
                            type="checkbox"
                            checked={props.form.is_active}
                            disabled={props.submitting}
                            onchange={on_active_change}
                        />
                        <span class="switch-slider"></span>
                    </label>
                </div>
            </section>

            <hr class="divider" />

            <section class="form-section">
                <h3>{"Học vị"}</h3>
                <DegreeTable
                    degrees={props.form.degrees.clone()}
                    disabled={props.submitting}
                    dispatch={props.dispatch.clone()}
                />
            </section>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Đang lưu..." } else { "+ Lưu" }}
                </button>
            </div>
        </form>
    }
}
