//! Sidebar navigation with collapsible menu groups.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::paths;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            icon: "bar-chart",
            items: vec![
                (paths::HOME, "Reports", "bar-chart"),
                (paths::ACCOUNTS, "Accounts & GST", "calculator"),
            ],
        },
        MenuGroup {
            id: "masters",
            label: "Masters",
            icon: "layers",
            items: vec![
                (paths::CUSTOMERS, "Customers", "users"),
                (paths::VENDORS, "Vendors", "users"),
                (paths::SALESMEN, "Salesmen", "users"),
                (paths::JOB_WORKERS, "Job Workers", "users"),
                (paths::CATEGORIES, "Categories", "tag"),
                (paths::DESIGNS, "Designs", "gem"),
                (paths::HSN, "HSN Master", "percent"),
                (paths::MAKING_CHARGES, "Making Charges", "calculator"),
                (paths::MATERIAL_TYPES, "Material Types", "layers"),
                (paths::PURITIES, "Purities", "percent"),
                (paths::SIZES, "Sizes", "tag"),
                (paths::METAL_RATES, "Metal Rates", "trending-up"),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "box",
            items: vec![(paths::STOCK, "Stock", "box")],
        },
        MenuGroup {
            id: "transactions",
            label: "Transactions",
            icon: "shopping-cart",
            items: vec![
                (paths::ORDERS, "Orders", "file-text"),
                (paths::SALES, "Sales", "shopping-cart"),
                (paths::NEW_SALE, "New Invoice", "plus"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let expanded_groups = RwSignal::new(vec!["overview", "masters", "inventory", "transactions"]);

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| expanded_groups.update(|groups| {
                                match groups.iter().position(|g| *g == group_id) {
                                    Some(pos) => { groups.remove(pos); }
                                    None => groups.push(group_id),
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(href, label, icon_name)| view! {
                                    <A href=href attr:class="app-sidebar__link">
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || pathname.get() == href
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    </A>
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
