use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use shared::position_screen::{PositionAction, PositionField, PositionForm as PositionDraft, PositionStatus};
use shared::validation::FormErrors;

#[derive(Properties, PartialEq)]
pub struct PositionFormProps {
    pub form: PositionDraft,
    pub errors: FormErrors<PositionField>,
    pub submitting: bool,
    pub dispatch: Callback<PositionAction>,
    pub on_submit: Callback<()>,
}

#[function_component(PositionForm)]
pub fn position_form(props: &PositionFormProps) -> Html {
    let field_error = |field: PositionField| match props.errors.get(field) {
        Some(message) => html! { <div class="form-error">{message}</div> },
        None => html! {},
    };

    let on_text_input = |field: PositionField| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(PositionAction::FieldChanged(field, input.value()));
        })
    };

    let on_description_input = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            dispatch.emit(PositionAction::FieldChanged(PositionField::Description, textarea.value()));
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
            <div class="form-item">
                <label class="required">{"Mã"}</label>
                <input
                    type="text"
                    class="input"
                    placeholder="Nhập mã vị trí"
                    value={props.form.code.clone()}
                    disabled={props.submitting}
                    oninput={on_text_input(PositionField::Code)}
                />
                {field_error(PositionField::Code)}
            </div>

            <div class="form-item">
                <label class="required">{"Tên"}</label>
                <input
                    type="text"
                    class="input"
                    placeholder="Nhập tên vị trí"
                    value={props.form.name.clone()}
                    disabled={props.submitting}
                    oninput={on_text_input(PositionField::Name)}
                />
                {field_error(PositionField::Name)}
            </div>

            <div class="form-item">
                <label class="required">{"Mô tả"}</label>
                <textarea
                    class="input"
                    rows="4"
                    placeholder="Nhập mô tả"
                    value={props.form.description.clone()}
                    disabled={props.submitting}
                    oninput={on_description_input}
                />
                {field_error(PositionField::Description)}
            </div>

            <div class="form-item">
                <label class="required">{"Trạng thái"}</label>
                <div class="segmented" role="radiogroup">
                    {for PositionStatus::ALL.iter().map(|status| {
                        let status = *status;
                        let dispatch = props.dispatch.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatch.emit(PositionAction::StatusChanged(status));
                        });
                        html! {
                            <button
                                type="button"
                                role="radio"
                                aria-checked={(props.form.status == status).to_string()}
                                class={classes!("segmented-item", (props.form.status == status).then_some("selected"))}
                                data-value={status.value()}
                                disabled={props.submitting}
                                {onclick}
                            >
                                {status.label()}
                            </button>
                        }
                    })}
                </div>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Đang lưu..." } else { "Lưu" }}
                </button>
            </div>
        </form>
    }
}
