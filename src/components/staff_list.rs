use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::pagination::{PageControls, SearchBox};
use crate::hooks::{use_pagination, use_toast, FetchFn, PaginationOptions};
use crate::models::StaffMember;
use crate::services::StaffService;
use crate::utils::dates::format_optional_date;

#[function_component(StaffListPage)]
pub fn staff_list_page() -> Html {
    let service = use_memo((), |_| StaffService::new());
    let toast = use_toast();
    let search = use_state(String::new);

    let fetch: FetchFn<StaffMember> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_staff(&params).await })
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

    let on_delete = {
        let service = service.clone();
        let toast = toast.clone();
        let pager = pager.clone();
        Callback::from(move |member: StaffMember| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message(&format!("Remove {} from staff?", member.full_name()))
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
                match service.delete_staff(member.id).await {
                    Ok(()) => {
                        toast.success(format!("{} removed", member.full_name()));
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
        .map(|member| {
            let on_delete = {
                let on_delete = on_delete.clone();
                let member = member.clone();
                Callback::from(move |_| on_delete.emit(member.clone()))
            };
            html! {
                <tr key={member.id}>
                    <td>{ &member.staff_id }</td>
                    <td>{ member.full_name() }</td>
                    <td>{ &member.position }</td>
                    <td>{ member.languages_taught.join(", ") }</td>
                    <td>{ format_optional_date(&member.hire_date) }</td>
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
                <h2>{"Staff"}</h2>
            </div>

            <SearchBox placeholder="Search staff..." on_search={on_search} />

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
                        <th>{"Position"}</th>
                        <th>{"Languages"}</th>
                        <th>{"Hired"}</th>
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
