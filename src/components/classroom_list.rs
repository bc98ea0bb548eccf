use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::PageControls;
use crate::hooks::{use_pagination, use_toast, FetchFn, PaginationOptions};
use crate::models::Classroom;
use crate::services::FacilityService;

#[function_component(ClassroomListPage)]
pub fn classroom_list_page() -> Html {
    let service = use_memo((), |_| FacilityService::new());
    let toast = use_toast();

    let fetch: FetchFn<Classroom> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_classrooms(&params).await })
        })
    };
    let pager = use_pagination(fetch, vec![], PaginationOptions::default());

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |room: Classroom| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Delete classroom {}?", room.name))
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
                match service.delete_classroom(room.id).await {
                    Ok(()) => {
                        toast.success(format!("Classroom {} deleted", room.name));
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
        .map(|room| {
            let on_delete = {
                let on_delete = on_delete.clone();
                let room = room.clone();
                Callback::from(move |_| on_delete.emit(room.clone()))
            };
            let equipment = match (room.has_projector, room.has_whiteboard) {
                (true, true) => "projector, whiteboard",
                (true, false) => "projector",
                (false, true) => "whiteboard",
                (false, false) => "—",
            };
            html! {
                <tr key={room.id}>
                    <td>{ &room.name }</td>
                    <td>{ room.building.clone().unwrap_or_else(|| "—".to_string()) }</td>
                    <td>{ room.capacity }</td>
                    <td>{ equipment }</td>
                    <td>{ if room.is_available { "available" } else { "unavailable" } }</td>
                    <td class="row-actions">
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
                <h2>{"Classrooms"}</h2>
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
                        <th>{"Name"}</th>
                        <th>{"Building"}</th>
                        <th>{"Capacity"}</th>
                        <th>{"Equipment"}</th>
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
        </section>
    }
}
