use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::PageControls;
use crate::hooks::{use_pagination, use_toast, FetchFn, PaginationOptions};
use crate::models::CourseMaterial;
use crate::routes::{navigate, Route};
use crate::services::CurriculumService;

#[derive(Properties, PartialEq)]
pub struct MaterialListProps {
    pub course_id: i64,
}

#[function_component(MaterialListPage)]
pub fn material_list_page(props: &MaterialListProps) -> Html {
    let service = use_memo((), |_| CurriculumService::new());
    let toast = use_toast();
    let course_id = props.course_id;

    let fetch: FetchFn<CourseMaterial> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_materials(course_id, &params).await })
        })
    };
    let pager = use_pagination(fetch, vec![], PaginationOptions::default());

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |material: CourseMaterial| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete material \"{}\"?", material.title))
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
                match service.delete_material(material.id).await {
                    Ok(()) => {
                        toast.success("Material deleted");
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
        .map(|material| {
            let on_delete = {
                let on_delete = on_delete.clone();
                let material = material.clone();
                Callback::from(move |_| on_delete.emit(material.clone()))
            };
            let link = match &material.url {
                Some(url) => html! {
                    <a href={url.clone()} target="_blank" rel="noreferrer">{"Open"}</a>
                },
                None => html! { <span>{"—"}</span> },
            };
            html! {
                <tr key={material.id}>
                    <td>{ &material.title }</td>
                    <td>{ &material.material_type }</td>
                    <td>{ link }</td>
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
                <h2>{"Course materials"}</h2>
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
                        <th>{"Title"}</th>
                        <th>{"Type"}</th>
                        <th>{"Link"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    if pager.loading() && pager.items().is_empty() {
                        <tr><td colspan="4" class="table-loading">{"Loading..."}</td></tr>
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
