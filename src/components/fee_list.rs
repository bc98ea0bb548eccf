use std::rc::Rc;

use yew::prelude::*;

use crate::components::pagination::PageControls;
use crate::hooks::{use_pagination, FetchFn, PaginationOptions};
use crate::models::FeeItem;
use crate::services::FinanceService;
use crate::utils::dates::format_optional_date;

#[function_component(FeeListPage)]
pub fn fee_list_page() -> Html {
    let service = use_memo((), |_| FinanceService::new());

    let fetch: FetchFn<FeeItem> = {
        let service = service.clone();
        Rc::new(move |params| {
            let service = service.clone();
            Box::pin(async move { service.list_fee_items(&params).await })
        })
    };
    let pager = use_pagination(fetch, vec![], PaginationOptions::default());

    let rows = pager
        .items()
        .iter()
        .map(|fee| {
            html! {
                <tr key={fee.id}>
                    <td>{ &fee.name }</td>
                    <td>{ &fee.fee_type }</td>
                    <td class="amount">{ &fee.amount }</td>
                    <td>{ if fee.is_optional { "optional" } else { "mandatory" } }</td>
                    <td>{ format_optional_date(&fee.due_date) }</td>
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
                <h2>{"Fee schedule"}</h2>
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
                        <th>{"Fee"}</th>
                        <th>{"Type"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Kind"}</th>
                        <th>{"Due"}</th>
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
