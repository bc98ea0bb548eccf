use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::Role;
use crate::routes::{navigate, Route};

struct Shortcut {
    title: &'static str,
    detail: &'static str,
    route: Route,
    roles: &'static [Role],
}

const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        title: "Courses",
        detail: "Curriculum, lessons and materials",
        route: Route::Courses,
        roles: &[Role::Teacher, Role::Admin],
    },
    Shortcut {
        title: "Students",
        detail: "Enrolment and student records",
        route: Route::Students,
        roles: &[Role::Teacher, Role::Admin],
    },
    Shortcut {
        title: "Staff",
        detail: "Teachers and administrative staff",
        route: Route::Staff,
        roles: &[Role::Admin],
    },
    Shortcut {
        title: "Payments",
        detail: "Received payments and receipts",
        route: Route::Payments,
        roles: &[Role::Admin],
    },
    Shortcut {
        title: "Leads",
        detail: "Prospective students and follow-ups",
        route: Route::Leads,
        roles: &[Role::Admin],
    },
    Shortcut {
        title: "Feedback",
        detail: "What students and staff are telling us",
        route: Route::Feedback,
        roles: &[Role::Teacher, Role::Admin],
    },
];

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_auth();

    let greeting = auth
        .user()
        .map(|u| format!("Welcome, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome".to_string());

    let cards = SHORTCUTS
        .iter()
        .filter(|s| auth.has_role(s.roles))
        .map(|s| {
            let route = s.route;
            let onclick = Callback::from(move |_| navigate(route));
            html! {
                <div class="dashboard-card" {onclick}>
                    <h3>{ s.title }</h3>
                    <p>{ s.detail }</p>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="page dashboard">
            <h2>{ greeting }</h2>
            if auth.has_role(&[Role::Student]) {
                <p class="page-subtitle">
                    {"Your enrolment details are managed by the school office."}
                </p>
            }
            <div class="dashboard-grid">{ cards }</div>
        </section>
    }
}
