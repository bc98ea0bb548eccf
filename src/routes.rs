// ============================================================================
// ROUTES - Path <-> screen mapping and per-route role requirements
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::{window, PopStateEvent};

use crate::models::Role;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Profile,
    Courses,
    CourseLessons(i64),
    CourseMaterials(i64),
    Students,
    Staff,
    Classrooms,
    Resources,
    Fees,
    Payments,
    Campaigns,
    Leads,
    Assessments,
    Feedback,
    Improvements,
    NotFound,
}

/// Who may open a route. Public screens are reachable logged out; the rest
/// name the roles they accept.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteAccess {
    Public,
    Roles(&'static [Role]),
}

const ANY_USER: &[Role] = &[Role::Student, Role::Teacher, Role::Admin];
const TEACHING: &[Role] = &[Role::Teacher, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["dashboard"] => Route::Dashboard,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password"] => Route::ResetPassword,
            ["profile"] => Route::Profile,
            ["courses"] => Route::Courses,
            ["courses", id, "lessons"] => match id.parse() {
                Ok(id) => Route::CourseLessons(id),
                Err(_) => Route::NotFound,
            },
            ["courses", id, "materials"] => match id.parse() {
                Ok(id) => Route::CourseMaterials(id),
                Err(_) => Route::NotFound,
            },
            ["students"] => Route::Students,
            ["staff"] => Route::Staff,
            ["classrooms"] => Route::Classrooms,
            ["resources"] => Route::Resources,
            ["fees"] => Route::Fees,
            ["payments"] => Route::Payments,
            ["campaigns"] => Route::Campaigns,
            ["leads"] => Route::Leads,
            ["assessments"] => Route::Assessments,
            ["feedback"] => Route::Feedback,
            ["improvements"] => Route::Improvements,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::CourseLessons(id) => format!("/courses/{}/lessons", id),
            Route::CourseMaterials(id) => format!("/courses/{}/materials", id),
            Route::Students => "/students".to_string(),
            Route::Staff => "/staff".to_string(),
            Route::Classrooms => "/classrooms".to_string(),
            Route::Resources => "/resources".to_string(),
            Route::Fees => "/fees".to_string(),
            Route::Payments => "/payments".to_string(),
            Route::Campaigns => "/campaigns".to_string(),
            Route::Leads => "/leads".to_string(),
            Route::Assessments => "/assessments".to_string(),
            Route::Feedback => "/feedback".to_string(),
            Route::Improvements => "/improvements".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Login
            | Route::Register
            | Route::ForgotPassword
            | Route::ResetPassword
            | Route::NotFound => RouteAccess::Public,

            Route::Dashboard | Route::Profile => RouteAccess::Roles(ANY_USER),

            Route::Courses
            | Route::CourseLessons(_)
            | Route::CourseMaterials(_)
            | Route::Students
            | Route::Classrooms
            | Route::Resources
            | Route::Assessments
            | Route::Feedback => RouteAccess::Roles(TEACHING),

            Route::Staff
            | Route::Fees
            | Route::Payments
            | Route::Campaigns
            | Route::Leads
            | Route::Improvements => RouteAccess::Roles(ADMIN_ONLY),
        }
    }
}

/// Route for the URL currently in the address bar.
pub fn current_route() -> Route {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Route::from_path(&path)
}

/// Push a new history entry and let the shell's popstate listener pick it
/// up, so programmatic navigation and the back button share one code path.
pub fn navigate(route: Route) {
    let Some(win) = window() else { return };

    let path = route.path();
    if let Ok(history) = win.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path.as_str()));
    }

    if let Ok(event) = PopStateEvent::new("popstate") {
        let _ = win.dispatch_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_from_path() {
        let routes = [
            Route::Login,
            Route::Dashboard,
            Route::Courses,
            Route::CourseLessons(12),
            Route::CourseMaterials(3),
            Route::Students,
            Route::Payments,
            Route::Improvements,
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn root_path_lands_on_dashboard() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::from_path("/no-such-screen"), Route::NotFound);
        assert_eq!(Route::from_path("/courses/abc/lessons"), Route::NotFound);
        assert_eq!(Route::from_path("/courses/1/unknown"), Route::NotFound);
    }

    #[test]
    fn auth_screens_are_public() {
        assert_eq!(Route::Login.access(), RouteAccess::Public);
        assert_eq!(Route::ResetPassword.access(), RouteAccess::Public);
    }

    #[test]
    fn finance_and_marketing_screens_are_admin_only() {
        for route in [Route::Staff, Route::Fees, Route::Payments, Route::Leads] {
            assert_eq!(route.access(), RouteAccess::Roles(&[Role::Admin]));
        }
    }

    #[test]
    fn teaching_screens_accept_teacher_and_admin() {
        assert_eq!(
            Route::Courses.access(),
            RouteAccess::Roles(&[Role::Teacher, Role::Admin])
        );
    }
}
