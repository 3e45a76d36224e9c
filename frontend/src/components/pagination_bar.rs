use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{PageState, PAGE_SIZE_OPTIONS};

/// Beyond this many pages the bar collapses distant pages into "…"
const MAX_PLAIN_PAGES: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons to show for `current` out of `count` pages
pub fn page_items(current: u32, count: u32) -> Vec<PageItem> {
    if count <= MAX_PLAIN_PAGES {
        return (1..=count).map(PageItem::Page).collect();
    }

    let window_start = current.saturating_sub(2).max(2);
    let window_end = current.saturating_add(2).min(count - 1);

    let mut items = vec![PageItem::Page(1)];
    if window_start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((window_start..=window_end).map(PageItem::Page));
    if window_end < count - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(count));
    items
}

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub page: PageState,
    pub disabled: bool,
    /// Emitted with the page/size the user asked for
    pub on_change: Callback<PageState>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let page = props.page;

    let go_to = {
        let on_change = props.on_change.clone();
        move |target: u32| {
            let on_change = on_change.clone();
            Callback::from(move |_: MouseEvent| on_change.emit(page.with_page(target)))
        }
    };

    let on_size_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<u32>() {
                on_change.emit(page.with_page_size(size));
            }
        })
    };

    let on_jump = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(target) = page.parse_jump(&input.value()) {
                on_change.emit(page.with_page(target));
            }
            input.set_value("");
        })
    };

    html! {
        <div class="pagination">
            <span class="pagination-total">{page.total_label()}</span>
            <button
                type="button"
                class="pagination-prev"
                disabled={props.disabled || !page.has_previous()}
                onclick={go_to(page.current.saturating_sub(1).max(1))}
            >
                {"‹"}
            </button>
            {for page_items(page.current, page.page_count()).into_iter().map(|item| match item {
                PageItem::Page(number) => html! {
                    <button
                        type="button"
                        class={classes!("pagination-item", (number == page.current).then_some("active"))}
                        disabled={props.disabled}
                        onclick={go_to(number)}
                    >
                        {number}
                    </button>
                },
                PageItem::Ellipsis => html! { <span class="pagination-ellipsis">{"…"}</span> },
            })}
            <button
                type="button"
                class="pagination-next"
                disabled={props.disabled || !page.has_next()}
                onclick={go_to(page.current.saturating_add(1))}
            >
                {"›"}
            </button>
            <select class="pagination-size" disabled={props.disabled} onchange={on_size_change}>
                {for PAGE_SIZE_OPTIONS.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == page.page_size}>
                        {format!("{} / trang", size)}
                    </option>
                })}
            </select>
            <label class="pagination-jump">
                {"Đi đến"}
                <input type="number" min="1" disabled={props.disabled} onchange={on_jump} />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_few_pages_are_all_listed() {
        assert_eq!(page_items(1, 0), vec![]);
        assert_eq!(
            page_items(2, 3),
            vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
        );
        assert_eq!(page_items(1, 7).len(), 7);
    }

    #[test]
    fn test_many_pages_collapse_around_current() {
        use PageItem::*;
        assert_eq!(
            page_items(1, 20),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_items(20, 20),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_page_past_the_end_does_not_overflow() {
        use PageItem::*;
        assert_eq!(
            page_items(u32::MAX, 20),
            vec![Page(1), Ellipsis, Page(20)]
        );
        assert_eq!(page_items(u32::MAX, u32::MAX).last(), Some(&Page(u32::MAX)));
    }
}
