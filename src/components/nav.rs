use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_auth, use_toast};
use crate::models::Role;
use crate::routes::{navigate, Route};

struct NavItem {
    label: &'static str,
    route: Route,
    roles: &'static [Role],
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", route: Route::Dashboard, roles: &[Role::Student, Role::Teacher, Role::Admin] },
    NavItem { label: "Courses", route: Route::Courses, roles: &[Role::Teacher, Role::Admin] },
    NavItem { label: "Students", route: Route::Students, roles: &[Role::Teacher, Role::Admin] },
    NavItem { label: "Staff", route: Route::Staff, roles: &[Role::Admin] },
    NavItem { label: "Classrooms", route: Route::Classrooms, roles: &[Role::Teacher, Role::Admin] },
    NavItem { label: "Resources", route: Route::Resources, roles: &[Role::Teacher, Role::Admin] },
    NavItem { label: "Fees", route: Route::Fees, roles: &[Role::Admin] },
    NavItem { label: "Payments", route: Route::Payments, roles: &[Role::Admin] },
    NavItem { label: "Campaigns", route: Route::Campaigns, roles: &[Role::Admin] },
    NavItem { label: "Leads", route: Route::Leads, roles: &[Role::Admin] },
    NavItem { label: "Assessments", route: Route::Assessments, roles: &[Role::Teacher, Role::Admin] },
    NavItem { label: "Feedback", route: Route::Feedback, roles: &[Role::Teacher, Role::Admin] },
    NavItem { label: "Improvements", route: Route::Improvements, roles: &[Role::Admin] },
];

/// Top navigation, filtered to the links the current role may open.
#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Route,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let auth = use_auth();
    let toast = use_toast();

    let user_label = auth
        .user()
        .map(|u| u.display_name())
        .unwrap_or_default();

    let on_logout = {
        let auth = auth.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let toast = toast.clone();
            spawn_local(async move {
                // Local state is cleared either way; the error is only worth
                // a note.
                if let Err(err) = auth.logout().await {
                    toast.warning(format!("Signed out locally ({})", err.message));
                }
                navigate(Route::Login);
            });
        })
    };

    let links = NAV_ITEMS
        .iter()
        .filter(|item| auth.has_role(item.roles))
        .map(|item| {
            let route = item.route;
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                navigate(route);
            });
            let class = if route == props.active { "nav-link active" } else { "nav-link" };
            html! {
                <a href={route.path()} {class} {onclick}>{ item.label }</a>
            }
        })
        .collect::<Html>();

    let on_profile = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(Route::Profile);
    });

    html! {
        <header class="app-header">
            <h1 class="app-title">{"LinguaAdmin"}</h1>
            <nav class="app-nav">{ links }</nav>
            <div class="header-actions">
                <a href={Route::Profile.path()} class="nav-user" onclick={on_profile}>{ user_label }</a>
                <button class="btn-logout" onclick={on_logout}>{"Sign out"}</button>
            </div>
        </header>
    }
}
