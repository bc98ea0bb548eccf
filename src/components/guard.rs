use yew::prelude::*;

use crate::components::login::LoginPage;
use crate::hooks::use_auth;
use crate::routes::{Route, RouteAccess};

#[derive(Properties, PartialEq)]
pub struct RequireAccessProps {
    pub route: Route,
    pub children: Children,
}

/// Route guard. Public routes render as-is; everything else needs an
/// authenticated user whose role the route accepts. An unauthenticated
/// visitor gets the login screen in place, a role mismatch gets the
/// access-denied screen.
#[function_component(RequireAccess)]
pub fn require_access(props: &RequireAccessProps) -> Html {
    let auth = use_auth();

    match props.route.access() {
        RouteAccess::Public => html! { <>{props.children.clone()}</> },
        RouteAccess::Roles(roles) => {
            if auth.loading() {
                return html! {
                    <div class="loading">
                        <div class="loading-spinner"></div>
                        <p>{"Loading..."}</p>
                    </div>
                };
            }

            if !auth.is_authenticated() {
                return html! { <LoginPage /> };
            }

            if !auth.has_role(roles) {
                return html! { <AccessDenied /> };
            }

            html! { <>{props.children.clone()}</> }
        }
    }
}

#[function_component(AccessDenied)]
pub fn access_denied() -> Html {
    html! {
        <div class="access-denied">
            <h1>{"Access denied"}</h1>
            <p>{"Your account does not have permission to open this screen."}</p>
        </div>
    }
}
