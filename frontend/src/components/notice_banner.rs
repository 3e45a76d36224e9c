use yew::prelude::*;
use shared::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
}

/// Transient success/error message pinned to the top of the page
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div class={notice.css_class()} role="status">
                {&notice.text}
            </div>
        },
        None => html! {},
    }
}
