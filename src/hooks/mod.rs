pub mod use_auth;
pub mod use_form;
pub mod use_pagination;
pub mod use_toast;

pub use use_auth::{use_auth, AuthProvider, SessionState, UseAuthHandle};
pub use use_form::{use_form, Field, Rule, UseFormHandle};
pub use use_pagination::{
    use_pagination, FetchFn, PageCursor, PageFuture, PaginationOptions, UsePaginationHandle,
};
pub use use_toast::{use_toast, Toast, ToastLevel, ToastProvider, UseToastHandle};
