use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::assessment_list::AssessmentListPage;
use crate::components::campaign_list::CampaignListPage;
use crate::components::classroom_list::ClassroomListPage;
use crate::components::course_list::CourseListPage;
use crate::components::dashboard::DashboardPage;
use crate::components::fee_list::FeeListPage;
use crate::components::feedback_list::FeedbackListPage;
use crate::components::guard::RequireAccess;
use crate::components::improvement_list::ImprovementListPage;
use crate::components::lead_list::LeadListPage;
use crate::components::lesson_list::LessonListPage;
use crate::components::login::LoginPage;
use crate::components::material_list::MaterialListPage;
use crate::components::nav::NavBar;
use crate::components::payment_list::PaymentListPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::resource_list::ResourceListPage;
use crate::components::staff_list::StaffListPage;
use crate::components::student_list::StudentListPage;
use crate::components::password_reset::{ForgotPasswordPage, ResetPasswordPage};
use crate::hooks::{use_auth, use_toast, AuthProvider, ToastProvider};
use crate::routes::{current_route, navigate, Route};
use crate::utils::SESSION_EXPIRED_EVENT;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AuthProvider>
                <Shell />
            </AuthProvider>
        </ToastProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let route = use_state(current_route);

    // Back/forward buttons and navigate() both land here. The listener is
    // registered once for the app's lifetime, so forget() is safe.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(current_route());
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }
            closure.forget();
            || ()
        });
    }

    // The API client announces a rejected token with a window event; drop
    // the in-memory session and send the user back to the login screen.
    {
        let auth = auth.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                log::warn!("⚠️ Session expired, returning to login");
                auth.clear_session();
                toast.warning("Your session has expired, please sign in again");
                navigate(Route::Login);
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(win) = web_sys::window() {
                let _ = win.add_event_listener_with_callback(
                    SESSION_EXPIRED_EVENT,
                    closure.as_ref().unchecked_ref(),
                );
            }
            closure.forget();
            || ()
        });
    }

    let page = match *route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Courses => html! { <CourseListPage /> },
        Route::CourseLessons(course_id) => html! { <LessonListPage {course_id} /> },
        Route::CourseMaterials(course_id) => html! { <MaterialListPage {course_id} /> },
        Route::Students => html! { <StudentListPage /> },
        Route::Staff => html! { <StaffListPage /> },
        Route::Classrooms => html! { <ClassroomListPage /> },
        Route::Resources => html! { <ResourceListPage /> },
        Route::Fees => html! { <FeeListPage /> },
        Route::Payments => html! { <PaymentListPage /> },
        Route::Campaigns => html! { <CampaignListPage /> },
        Route::Leads => html! { <LeadListPage /> },
        Route::Assessments => html! { <AssessmentListPage /> },
        Route::Feedback => html! { <FeedbackListPage /> },
        Route::Improvements => html! { <ImprovementListPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <>
            if auth.is_authenticated() {
                <NavBar active={*route} />
            }
            <main class="app-main">
                <RequireAccess route={*route}>
                    { page }
                </RequireAccess>
            </main>
        </>
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let on_home = Callback::from(|_| navigate(Route::Dashboard));
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"That page does not exist."}</p>
            <button class="btn-primary" onclick={on_home}>{"Back to dashboard"}</button>
        </div>
    }
}
