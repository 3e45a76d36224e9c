use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::teacher_screen::{DegreeColumn, TeacherAction};
use shared::DegreeDraft;

#[derive(Properties, PartialEq)]
pub struct DegreeTableProps {
    pub degrees: Vec<DegreeDraft>,
    pub disabled: bool,
    pub dispatch: Callback<TeacherAction>,
}

/// Inline-edited degree rows; rows can be appended but never removed
#[function_component(DegreeTable)]
pub fn degree_table(props: &DegreeTableProps) -> Html {
    let on_add = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(TeacherAction::DegreeRowAdded))
    };

    let cell = |index: usize, column: DegreeColumn, value: &str, placeholder: &'static str| {
        let dispatch = props.dispatch.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(TeacherAction::DegreeEdited { index, column, value: input.value() });
        });
        let input_type = if column == DegreeColumn::Year { "number" } else { "text" };
        html! {
            <td>
                <input
                    type={input_type}
                    class="input input-small"
                    placeholder={placeholder}
                    value={value.to_string()}
                    disabled={props.disabled}
                    {oninput}
                />
            </td>
        }
    };

    html! {
        <div class="degree-table">
            <table class="data-table data-table-small">
                <thead>
                    <tr>
                        <th>{"Bậc"}</th>
                        <th>{"Trường"}</th>
                        <th>{"Chuyên ngành"}</th>
                        <th>{"Năm"}</th>
                        <th>{"Tốt nghiệp"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.degrees.iter().enumerate().map(|(index, degree)| {
                        let on_graduated = {
                            let dispatch = props.dispatch.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                dispatch.emit(TeacherAction::DegreeGraduatedToggled {
                                    index,
                                    graduated: input.checked(),
                                });
                            })
                        };
                        html! {
                            <tr key={index}>
                                {cell(index, DegreeColumn::Level, &degree.level, "Nhập bậc")}
                                {cell(index, DegreeColumn::School, &degree.school, "Nhập tên trường")}
                                {cell(index, DegreeColumn::Major, &degree.major, "Nhập chuyên ngành")}
                                {cell(index, DegreeColumn::Year, &degree.year, "Năm")}
                                <td>
                                    <label class="switch">
                                        <input
                                            type="checkbox"
                                            checked={degree.is_graduated}
                                            disabled={props.disabled}
                                            onchange={on_graduated}
                                        />
                                        <span class="switch-slider"></span>
                                    </label>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            <button type="button" class="btn btn-dashed" disabled={props.disabled} onclick={on_add}>
                {"Thêm"}
            </button>
        </div>
    }
}
