use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::PageControls;
use crate::hooks::{use_pagination, use_toast, FetchFn, PaginationOptions};
use crate::models::Lesson;
use crate::routes::{navigate, Route};
use crate::services::CurriculumService;

#[derive(Properties, PartialEq)]
pub struct LessonListProps {
    pub course_id: i64,
}

#[function_component(LessonListPage)]
pub fn lesson_list_page(props: &LessonListProps) -> Html {
    let service = use_memo((), |_| CurriculumService::new());
    let toast = use_toast();
    let course_id = props.course_id;

    let fetch: FetchFn<Lesson> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_lessons(course_id, &params).await })
        })
    };
    let pager = use_pagination(fetch, vec![], PaginationOptions::default());

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |lesson: Lesson| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete lesson \"{}\"?", lesson.title))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let service = service.clone();
            let toast = toast.clone();
            let pager = pager.clone();
            spawn_local(async move {
                match service.delete_lesson(lesson.id).await {
                    Ok(()) => {
                        toast.success("Lesson deleted");
                        pager.reload();
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    let rows = pager
        .items()
        .iter()
        .map(|lesson| {
            let on_delete = {
                let on_delete = on_delete.clone();
                let lesson = lesson.clone();
                Callback::from(move |_| on_delete.emit(lesson.clone()))
            };
            html! {
                <tr key={lesson.id}>
                    <td>{ lesson.order }</td>
                    <td>{ &lesson.title }</td>
                    <td>{ &lesson.description }</td>
                    <td>{ if lesson.is_active { "active" } else { "inactive" } }</td>
                    <td class="row-actions">
                        <button class="btn-link danger" onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let on_back = Callback::from(|_| navigate(Route::Courses));
    let on_retry = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.reload())
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h2>{"Lessons"}</h2>
                <button class="btn-link" onclick={on_back}>{"‹ Back to courses"}</button>
            </div>

            if let Some(error) = pager.error() {
                <div class="list-error">
                    { &error.message }
                    <button class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Title"}</th>
                        <th>{"Description"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    if pager.loading() && pager.items().is_empty() {
                        <tr><td colspan="5" class="table-loading">{"Loading..."}</td></tr>
                    } else {
                        { rows }
                    }
                </tbody>
            </table>

            <PageControls
                page={pager.page()}
                total_pages={pager.total_pages()}
                page_size={pager.page_size()}
                loading={pager.loading()}
                on_page={Callback::from({ let pager = pager.clone(); move |p| pager.go_to_page(p) })}
                on_page_size={Callback::from({ let pager = pager.clone(); move |s| pager.set_items_per_page(s) })}
            />
        </section>
    }
}
