use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::{PageControls, SearchBox};
use crate::hooks::{
    use_form, use_pagination, use_toast, Field, FetchFn, PaginationOptions, Rule,
};
use crate::models::{Course, CourseInput};
use crate::routes::{navigate, Route};
use crate::services::CurriculumService;

/// Courses with a create/edit form in a modal. The same screen pattern
/// (search, paged table, row actions, footer controls) repeats across the
/// console; this is the fullest instance of it.
#[function_component(CourseListPage)]
pub fn course_list_page() -> Html {
    let service = use_memo((), |_| CurriculumService::new());
    let toast = use_toast();

    let search = use_state(String::new);
    let editing = use_state(|| None::<Course>);
    let show_form = use_state(|| false);

    let fetch: FetchFn<Course> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_courses(&params).await })
        })
    };

    let filters = if search.is_empty() {
        vec![]
    } else {
        vec![("search".to_string(), (*search).clone())]
    };
    let pager = use_pagination(fetch, filters, PaginationOptions::default());

    let on_search = {
        let search = search.clone();
        let pager = pager.clone();
        Callback::from(move |term: String| {
            search.set(term);
            pager.refresh();
        })
    };

    let on_new = {
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            show_form.set(true);
        })
    };

    let on_edit = {
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |course: Course| {
            editing.set(Some(course));
            show_form.set(true);
        })
    };

    let on_close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let on_saved = {
        let show_form = show_form.clone();
        let pager = pager.clone();
        Callback::from(move |_| {
            show_form.set(false);
            pager.reload();
        })
    };

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |course: Course| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete course {}?", course.code))
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
                match service.delete_course(course.id).await {
                    Ok(()) => {
                        toast.success(format!("Course {} deleted", course.code));
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
        .map(|course| {
            let lessons_route = Route::CourseLessons(course.id);
            let materials_route = Route::CourseMaterials(course.id);
            let on_lessons = Callback::from(move |_| navigate(lessons_route));
            let on_materials = Callback::from(move |_| navigate(materials_route));
            let on_edit = {
                let on_edit = on_edit.clone();
                let course = course.clone();
                Callback::from(move |_| on_edit.emit(course.clone()))
            };
            let on_delete = {
                let on_delete = on_delete.clone();
                let course = course.clone();
                Callback::from(move |_| on_delete.emit(course.clone()))
            };

            html! {
                <tr key={course.id}>
                    <td>{ &course.code }</td>
                    <td>{ &course.name }</td>
                    <td>{ course.level.as_str() }</td>
                    <td>{ course.credits }</td>
                    <td>{ if course.is_active { "active" } else { "inactive" } }</td>
                    <td class="row-actions">
                        <button class="btn-link" onclick={on_lessons}>{"Lessons"}</button>
                        <button class="btn-link" onclick={on_materials}>{"Materials"}</button>
                        <button class="btn-link" onclick={on_edit}>{"Edit"}</button>
                        <button class="btn-link danger" onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    let on_retry = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.reload())
    };

    html! {
        <section class="page">
            <div class="page-header">
                <h2>{"Courses"}</h2>
                <button class="btn-primary" onclick={on_new}>{"New course"}</button>
            </div>

            <SearchBox placeholder="Search courses..." on_search={on_search} />

            if let Some(error) = pager.error() {
                <div class="list-error">
                    { &error.message }
                    <button class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"Code"}</th>
                        <th>{"Name"}</th>
                        <th>{"Level"}</th>
                        <th>{"Credits"}</th>
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    if pager.loading() && pager.items().is_empty() {
                        <tr><td colspan="6" class="table-loading">{"Loading..."}</td></tr>
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

            if *show_form {
                <CourseForm
                    course={(*editing).clone()}
                    on_close={on_close_form}
                    on_saved={on_saved}
                />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CourseFormProps {
    course: Option<Course>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component(CourseForm)]
fn course_form(props: &CourseFormProps) -> Html {
    let service = use_memo((), |_| CurriculumService::new());
    let toast = use_toast();
    let saving = use_state(|| false);

    let form = use_form(vec![
        Field::new("code", "Course code", vec![Rule::Required]),
        Field::new("name", "Course name", vec![Rule::Required]),
        Field::new("description", "Description", vec![]),
        Field::new("level", "Level", vec![Rule::Required]),
        Field::new("credits", "Credits", vec![Rule::Required, Rule::Numeric]),
    ]);

    // Prefill when editing an existing course.
    {
        let form = form.clone();
        let course = props.course.clone();
        use_effect_with((), move |_| {
            if let Some(course) = course {
                form.set_values(&[
                    ("code", course.code),
                    ("name", course.name),
                    ("description", course.description),
                    ("level", course.level.as_str().to_string()),
                    ("credits", course.credits.to_string()),
                ]);
            } else {
                form.set_value("level", "beginner".to_string());
            }
            || ()
        });
    }

    let onsubmit = {
        let service = service.clone();
        let toast = toast.clone();
        let form = form.clone();
        let saving = saving.clone();
        let existing_id = props.course.as_ref().map(|c| c.id);
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }

            let input = CourseInput {
                code: form.value("code"),
                name: form.value("name"),
                description: form.value("description"),
                level: form.value("level"),
                credits: form.value("credits").parse().unwrap_or(3),
                is_active: true,
            };

            let service = service.clone();
            let toast = toast.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            spawn_local(async move {
                let result = match existing_id {
                    Some(id) => service.update_course(id, &input).await,
                    None => service.create_course(&input).await,
                };
                saving.set(false);
                match result {
                    Ok(course) => {
                        toast.success(format!("Course {} saved", course.code));
                        on_saved.emit(());
                    }
                    Err(err) => toast.error(err.message),
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if props.course.is_some() { "Edit course" } else { "New course" };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>{ title }</h3>
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="code">{"Code"}</label>
                        <input
                            type="text"
                            id="code"
                            value={form.value("code")}
                            oninput={form.oninput("code")}
                            onblur={form.onblur("code")}
                        />
                        if let Some(error) = form.error("code") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input
                            type="text"
                            id="name"
                            value={form.value("name")}
                            oninput={form.oninput("name")}
                            onblur={form.onblur("name")}
                        />
                        if let Some(error) = form.error("name") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <input
                            type="text"
                            id="description"
                            value={form.value("description")}
                            oninput={form.oninput("description")}
                        />
                    </div>

                    <div class="form-group">
                        <label for="level">{"Level"}</label>
                        <select
                            id="level"
                            onchange={{
                                let form = form.clone();
                                Callback::from(move |e: Event| {
                                    let value = e
                                        .target_unchecked_into::<web_sys::HtmlSelectElement>()
                                        .value();
                                    form.set_value("level", value);
                                })
                            }}
                        >
                            { for ["beginner", "elementary", "intermediate", "advanced", "proficient"]
                                .iter()
                                .map(|level| html! {
                                    <option value={*level} selected={form.value("level") == *level}>
                                        { *level }
                                    </option>
                                }) }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="credits">{"Credits"}</label>
                        <input
                            type="number"
                            id="credits"
                            value={form.value("credits")}
                            oninput={form.oninput("credits")}
                            onblur={form.onblur("credits")}
                        />
                        if let Some(error) = form.error("credits") {
                            <span class="field-error">{ error }</span>
                        }
                    </div>

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
