use yew::prelude::*;

/// Shared pagination footer: prev/next, page indicator, page-size select.
/// The out-of-range protection lives here in the disabled buttons; the hook
/// itself passes any requested page through to the backend.
#[derive(Properties, PartialEq)]
pub struct PageControlsProps {
    pub page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub loading: bool,
    pub on_page: Callback<u32>,
    pub on_page_size: Callback<u32>,
}

const PAGE_SIZES: [u32; 3] = [10, 20, 50];

#[function_component(PageControls)]
pub fn page_controls(props: &PageControlsProps) -> Html {
    let page = props.page;

    let on_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(page.saturating_sub(1)))
    };

    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| on_page.emit(page + 1))
    };

    let on_size_change = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_unchecked_into::<web_sys::HtmlSelectElement>()
                .value();
            if let Ok(size) = value.parse() {
                on_page_size.emit(size);
            }
        })
    };

    html! {
        <div class="page-controls">
            <button
                class="btn-page"
                disabled={props.loading || page <= 1}
                onclick={on_prev}
            >
                {"‹ Prev"}
            </button>

            <span class="page-indicator">
                { format!("Page {} of {}", page, props.total_pages.max(1)) }
            </span>

            <button
                class="btn-page"
                disabled={props.loading || page >= props.total_pages}
                onclick={on_next}
            >
                {"Next ›"}
            </button>

            <select class="page-size-select" onchange={on_size_change}>
                { for PAGE_SIZES.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == props.page_size}>
                        { format!("{} per page", size) }
                    </option>
                }) }
            </select>
        </div>
    }
}

/// Free-text search box; emits on submit, owner decides what to do with the
/// term (usually: store it and refresh the pager).
#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let input_ref = use_node_ref();

    let onsubmit = {
        let input_ref = input_ref.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    html! {
        <form class="search-box" {onsubmit}>
            <input
                type="search"
                placeholder={props.placeholder.clone()}
                ref={input_ref}
            />
            <button type="submit" class="btn-search">{"Search"}</button>
        </form>
    }
}
