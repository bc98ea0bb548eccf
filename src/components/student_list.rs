use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::{PageControls, SearchBox};
use crate::hooks::{
    use_form, use_pagination, use_toast, Field, FetchFn, PaginationOptions, Rule,
};
use crate::models::{Student, StudentInput};
use crate::services::StudentService;
use crate::utils::dates::format_optional_date;

#[function_component(StudentListPage)]
pub fn student_list_page() -> Html {
    let service = use_memo((), |_| StudentService::new());
    let toast = use_toast();

    let search = use_state(String::new);
    let show_form = use_state(|| false);

    let fetch: FetchFn<Student> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_students(&params).await })
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
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(true))
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
            pager.refresh();
        })
    };

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |student: Student| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Remove student {}?", student.full_name()))
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
                match service.delete_student(student.id).await {
                    Ok(()) => {
                        toast.success(format!("{} removed", student.full_name()));
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
        .map(|student| {
            let on_delete = {
                let on_delete = on_delete.clone();
                let student = student.clone();
                Callback::from(move |_| on_delete.emit(student.clone()))
            };
            html! {
                <tr key={student.id}>
                    <td>{ &student.student_id }</td>
                    <td>{ student.full_name() }</td>
                    <td>{ &student.email }</td>
                    <td>{ &student.status }</td>
                    <td>{ format_optional_date(&student.admission_date) }</td>
                    <td class="row-actions">
                        <button class="btn-link danger" onclick={on_delete}>{"Remove"}</button>
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
                <h2>{"Students"}</h2>
                <button class="btn-primary" onclick={on_new}>{"Register student"}</button>
            </div>

            <SearchBox placeholder="Search students..." on_search={on_search} />

            if let Some(error) = pager.error() {
                <div class="list-error">
                    { &error.message }
                    <button class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Status"}</th>
                        <th>{"Admitted"}</th>
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
                <StudentForm on_close={on_close_form} on_saved={on_saved} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StudentFormProps {
    on_close: Callback<()>,
    on_saved: Callback<()>,
}

#[function_component(StudentForm)]
fn student_form(props: &StudentFormProps) -> Html {
    let service = use_memo((), |_| StudentService::new());
    let toast = use_toast();
    let saving = use_state(|| false);

    let form = use_form(vec![
        Field::new("first_name", "First name", vec![Rule::Required]),
        Field::new("last_name", "Last name", vec![Rule::Required]),
        Field::new("email", "Email", vec![Rule::Required, Rule::Email]),
        Field::new("phone", "Phone", vec![]),
        Field::new("city", "City", vec![]),
        Field::new("country", "Country", vec![]),
    ]);

    let onsubmit = {
        let service = service.clone();
        let toast = toast.clone();
        let form = form.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.validate_all() {
                return;
            }

            let input = StudentInput {
                first_name: form.value("first_name"),
                last_name: form.value("last_name"),
                email: form.value("email"),
                phone: form.value("phone"),
                city: form.value("city"),
                country: form.value("country"),
            };

            let service = service.clone();
            let toast = toast.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            spawn_local(async move {
                let result = service.create_student(&input).await;
                saving.set(false);
                match result {
                    Ok(student) => {
                        toast.success(format!("{} registered", student.full_name()));
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

    let text_field = |name: &'static str, label: &str| {
        html! {
            <div class="form-group">
                <label for={name}>{ label }</label>
                <input
                    type="text"
                    id={name}
                    value={form.value(name)}
                    oninput={form.oninput(name)}
                    onblur={form.onblur(name)}
                />
                if let Some(error) = form.error(name) {
                    <span class="field-error">{ error }</span>
                }
            </div>
        }
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>{"Register student"}</h3>
                <form {onsubmit}>
                    { text_field("first_name", "First name") }
                    { text_field("last_name", "Last name") }
                    { text_field("email", "Email") }
                    { text_field("phone", "Phone") }
                    { text_field("city", "City") }
                    { text_field("country", "Country") }

                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn-primary" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Register" } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
