use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::{AccountsDashboard, ReportsDashboard};
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_vendor::ui::list::VendorList;
use crate::domain::a003_salesman::ui::list::SalesmanList;
use crate::domain::a004_job_worker::ui::list::JobWorkerList;
use crate::domain::a005_category::ui::list::CategoryList;
use crate::domain::a006_design::ui::list::DesignList;
use crate::domain::a007_hsn::ui::list::HsnList;
use crate::domain::a008_making_charge::ui::list::MakingChargeList;
use crate::domain::a009_material_type::ui::list::MaterialTypeList;
use crate::domain::a010_purity::ui::list::PurityList;
use crate::domain::a011_size::ui::list::SizeList;
use crate::domain::a012_stock_item::ui::list::StockList;
use crate::domain::a013_order::ui::list::OrderList;
use crate::domain::a014_sale::ui::invoice::InvoiceBuilder;
use crate::domain::a014_sale::ui::list::SalesList;
use crate::domain::a018_metal_rate::ui::list::MetalRateList;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::guard::RouteGuard;
use crate::system::pages::login::LoginPage;

/// Signed-in area: shell around the matched screen.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RouteGuard>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Outlet /> }.into_any()
            />
        </RouteGuard>
    }
}

#[component]
fn SignInRoute() -> impl IntoView {
    view! {
        <RouteGuard>
            <LoginPage />
        </RouteGuard>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                <Route path=path!("/signin") view=SignInRoute />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=ReportsDashboard />
                    <Route path=path!("accounts") view=AccountsDashboard />
                    <Route path=path!("masters/customers") view=CustomerList />
                    <Route path=path!("masters/vendors") view=VendorList />
                    <Route path=path!("masters/salesmen") view=SalesmanList />
                    <Route path=path!("masters/job-workers") view=JobWorkerList />
                    <Route path=path!("masters/categories") view=CategoryList />
                    <Route path=path!("designs") view=DesignList />
                    <Route path=path!("settings/hsn") view=HsnList />
                    <Route path=path!("settings/making-charges") view=MakingChargeList />
                    <Route path=path!("settings/material-types") view=MaterialTypeList />
                    <Route path=path!("settings/purities") view=PurityList />
                    <Route path=path!("settings/sizes") view=SizeList />
                    <Route path=path!("settings/gold-silver-rate") view=MetalRateList />
                    <Route path=path!("stock") view=StockList />
                    <Route path=path!("orders") view=OrderList />
                    <Route path=path!("sales") view=SalesList />
                    <Route path=path!("sales/add") view=InvoiceBuilder />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
