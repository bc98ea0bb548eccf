// ============================================================================
// USE PAGINATION HOOK - Paged list state bound to a fetch function + the URL
// ============================================================================
// Decouples "a screen that shows a filtered, paged list" from how paging
// state is fetched and persisted. The browser URL stays a shareable
// representation of the current list view.
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::ListEnvelope;
use crate::services::ApiError;
use crate::utils::query;
use crate::utils::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PAGE_PARAM, PAGE_SIZE_PARAM};

pub type PageFuture<T> = Pin<Box<dyn Future<Output = Result<ListEnvelope<T>, ApiError>>>>;

/// The list fetch: query parameters in, envelope out.
pub type FetchFn<T> = Rc<dyn Fn(Vec<(String, String)>) -> PageFuture<T>>;

#[derive(Clone, PartialEq, Debug)]
pub struct PaginationOptions {
    pub page_param: String,
    pub page_size_param: String,
    pub default_page: u32,
    pub default_page_size: u32,
    /// Keep unrelated query parameters when writing page state back into
    /// the URL; otherwise the query string becomes the pagination keys only.
    pub preserve_params: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_param: PAGE_PARAM.to_string(),
            page_size_param: PAGE_SIZE_PARAM.to_string(),
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
            preserve_params: true,
        }
    }
}

/// Page/page-size arithmetic, separate from the hook so it runs under plain
/// unit tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PageCursor {
    pub page: u32,
    pub page_size: u32,
}

impl PageCursor {
    /// Initial cursor: the URL query wins over the configured defaults.
    pub fn from_query(search: &str, options: &PaginationOptions) -> Self {
        let parsed = query::parse_query(search);
        let page = query::get_param(&parsed, &options.page_param)
            .and_then(|v| v.parse().ok())
            .unwrap_or(options.default_page);
        let page_size = query::get_param(&parsed, &options.page_size_param)
            .and_then(|v| v.parse().ok())
            .unwrap_or(options.default_page_size);
        Self { page, page_size }
    }

    /// No clamping: out-of-range pages are the backend's to answer.
    pub fn go_to(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// A new page size invalidates the previous page's item range, so the
    /// cursor goes back to page 1.
    pub fn with_page_size(self, page_size: u32) -> Self {
        Self { page: 1, page_size }
    }

    pub fn refreshed(self) -> Self {
        Self { page: 1, ..self }
    }

    /// Query parameters for a fetch: pagination keys first, then the
    /// caller's filters.
    pub fn params(
        &self,
        options: &PaginationOptions,
        filters: &[(String, String)],
    ) -> Vec<(String, String)> {
        let mut params = vec![
            (options.page_param.clone(), self.page.to_string()),
            (options.page_size_param.clone(), self.page_size.to_string()),
        ];
        params.extend(filters.iter().cloned());
        params
    }

    pub fn total_pages(&self, total_items: u64) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        total_items.div_ceil(self.page_size as u64) as u32
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct PageState<T: Clone + PartialEq> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T: Clone + PartialEq> Default for PageState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            loading: false,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq> PageState<T> {
    fn to_loading(&self) -> Self {
        Self {
            items: self.items.clone(),
            total_items: self.total_items,
            loading: true,
            error: None,
        }
    }

    fn loaded(items: Vec<T>, total_items: u64) -> Self {
        Self {
            items,
            total_items,
            loading: false,
            error: None,
        }
    }

    /// Failure keeps whatever was on screen; only loading/error change, so
    /// the UI can show a retry affordance next to stale rows.
    fn to_failed(&self, error: ApiError) -> Self {
        Self {
            items: self.items.clone(),
            total_items: self.total_items,
            loading: false,
            error: Some(error),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UsePaginationHandle<T: Clone + PartialEq + 'static> {
    cursor: UseStateHandle<PageCursor>,
    state: UseStateHandle<PageState<T>>,
    reload_tick: UseStateHandle<u32>,
}

impl<T: Clone + PartialEq + 'static> UsePaginationHandle<T> {
    pub fn items(&self) -> &[T] {
        &self.state.items
    }

    pub fn total_items(&self) -> u64 {
        self.state.total_items
    }

    pub fn page(&self) -> u32 {
        self.cursor.page
    }

    pub fn page_size(&self) -> u32 {
        self.cursor.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.cursor.total_pages(self.state.total_items)
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.state.error.as_ref()
    }

    pub fn go_to_page(&self, page: u32) {
        self.cursor.set(self.cursor.go_to(page));
    }

    pub fn set_items_per_page(&self, page_size: u32) {
        self.cursor.set(self.cursor.with_page_size(page_size));
    }

    /// Refetch the current page with unchanged page/page-size.
    pub fn reload(&self) {
        self.reload_tick.set(self.reload_tick.wrapping_add(1));
    }

    /// Refetch from page 1 with the current page size; the right call after
    /// a filter change, so results are never shown mid-list against a
    /// changed filter set.
    pub fn refresh(&self) {
        self.cursor.set(self.cursor.refreshed());
        self.reload_tick.set(self.reload_tick.wrapping_add(1));
    }
}

#[hook]
pub fn use_pagination<T>(
    fetch: FetchFn<T>,
    filters: Vec<(String, String)>,
    options: PaginationOptions,
) -> UsePaginationHandle<T>
where
    T: Clone + PartialEq + 'static,
{
    let options = use_memo(options, |options| options.clone());

    let cursor = {
        let options = options.clone();
        use_state(move || PageCursor::from_query(&query::current_search(), &options))
    };
    let state = use_state(PageState::<T>::default);
    let reload_tick = use_state(|| 0u32);

    // Generation counter for in-flight fetches: only the response to the
    // most recent request may update visible state. A slow page-2 answer
    // arriving after a fast page-3 answer is discarded.
    let latest_request = use_mut_ref(|| 0u64);

    {
        let state = state.clone();
        let options = options.clone();
        let latest_request = latest_request.clone();
        use_effect_with((*cursor, *reload_tick), move |(cursor, _)| {
            let cursor = *cursor;
            let token = {
                let mut counter = latest_request.borrow_mut();
                *counter += 1;
                *counter
            };

            state.set(state.to_loading());
            let params = cursor.params(&options, &filters);

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch(params).await;

                if *latest_request.borrow() != token {
                    log::debug!("Stale response for page {} discarded", cursor.page);
                    return;
                }

                match result {
                    Ok(envelope) => {
                        let (items, total_items) = envelope.into_page();
                        state.set(PageState::loaded(items, total_items));

                        let existing = query::parse_query(&query::current_search());
                        let updates = [
                            (options.page_param.clone(), cursor.page.to_string()),
                            (options.page_size_param.clone(), cursor.page_size.to_string()),
                        ];
                        let merged =
                            query::merge_params(&existing, &updates, options.preserve_params);
                        query::replace_search(&merged);
                    }
                    Err(err) => {
                        log::error!("❌ List fetch failed: {}", err);
                        state.set(state.to_failed(err));
                    }
                }
            });

            || ()
        });
    }

    UsePaginationHandle {
        cursor,
        state,
        reload_tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> PaginationOptions {
        PaginationOptions::default()
    }

    #[test]
    fn cursor_initializes_from_url_over_defaults() {
        let cursor = PageCursor::from_query("?page=3&page_size=20", &options());
        assert_eq!(cursor, PageCursor { page: 3, page_size: 20 });

        let fallback = PageCursor::from_query("?status=active", &options());
        assert_eq!(fallback, PageCursor { page: 1, page_size: 10 });
    }

    #[test]
    fn cursor_honors_configured_param_names() {
        let opts = PaginationOptions {
            page_param: "p".into(),
            page_size_param: "per_page".into(),
            ..options()
        };
        let cursor = PageCursor::from_query("?p=7&per_page=50", &opts);
        assert_eq!(cursor, PageCursor { page: 7, page_size: 50 });
    }

    #[test]
    fn changing_page_size_always_resets_to_page_one() {
        let cursor = PageCursor { page: 9, page_size: 10 }.with_page_size(20);
        assert_eq!(cursor, PageCursor { page: 1, page_size: 20 });
    }

    #[test]
    fn out_of_range_pages_pass_through_unclamped() {
        let cursor = PageCursor { page: 2, page_size: 10 };
        assert_eq!(cursor.go_to(0).page, 0);
        assert_eq!(cursor.go_to(9999).page, 9999);
    }

    #[test]
    fn refresh_goes_back_to_page_one_keeping_size() {
        let cursor = PageCursor { page: 5, page_size: 25 }.refreshed();
        assert_eq!(cursor, PageCursor { page: 1, page_size: 25 });
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        let cursor = PageCursor { page: 1, page_size: 10 };
        assert_eq!(cursor.total_pages(42), 5);
        assert_eq!(cursor.total_pages(40), 4);
        assert_eq!(cursor.total_pages(0), 0);
        assert_eq!(cursor.total_pages(1), 1);
    }

    #[test]
    fn fetch_params_carry_pagination_keys_then_filters() {
        let cursor = PageCursor { page: 3, page_size: 20 };
        let filters = vec![("search".to_string(), "french".to_string())];
        assert_eq!(
            cursor.params(&options(), &filters),
            vec![
                ("page".to_string(), "3".to_string()),
                ("page_size".to_string(), "20".to_string()),
                ("search".to_string(), "french".to_string()),
            ]
        );
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let state = PageState::loaded(vec![1, 2, 3], 30);
        let failed = state.to_failed(ApiError {
            status: Some(502),
            message: "bad gateway".into(),
        });
        assert_eq!(failed.items, vec![1, 2, 3]);
        assert_eq!(failed.total_items, 30);
        assert!(!failed.loading);
        assert!(failed.error.is_some());
    }

    #[test]
    fn loading_transition_clears_stale_error() {
        let state = PageState::<u32>::default().to_failed(ApiError {
            status: None,
            message: "offline".into(),
        });
        let loading = state.to_loading();
        assert!(loading.loading);
        assert!(loading.error.is_none());
    }
}
