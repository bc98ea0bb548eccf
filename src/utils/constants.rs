/// localStorage keys. Namespaced so a shared dev origin doesn't collide
/// with other tools.
pub const STORAGE_KEY_AUTH_TOKEN: &str = "linguaAdmin_authToken";
pub const STORAGE_KEY_USER: &str = "linguaAdmin_user";

/// Default names of the pagination query parameters, matching what the
/// backend list endpoints accept.
pub const PAGE_PARAM: &str = "page";
pub const PAGE_SIZE_PARAM: &str = "page_size";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Window event fired by the API client when the backend rejects the stored
/// token; the app shell listens and routes back to login.
pub const SESSION_EXPIRED_EVENT: &str = "sessionExpired";
