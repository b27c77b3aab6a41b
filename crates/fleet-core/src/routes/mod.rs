//! The application's route table.

pub mod actions;
pub mod loaders;


use crate::router::{
    Revalidate, RouteContext, RouteDescriptor, RouteId, Router, private,
};

use actions::{CreateVehicleAction, DestroyVehicleAction, LoginAction};
use loaders::{
    AddFormLoader, CurrentUserLoader, DashboardLoader, VehicleListLoader, VehicleLoader,
    vehicle_list_key,
};

/// Every route, pages before the catch-all.
pub fn app_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::layout(RouteId::Root, "/")
            .loader(private(CurrentUserLoader))
            .revalidate(Revalidate::Once),
        RouteDescriptor::page(RouteId::Dashboard, "/")
            .parent(RouteId::Root)
            .loader(private(DashboardLoader)),
        RouteDescriptor::page(RouteId::Vehicles, "/vehicles")
            .parent(RouteId::Root)
            .loader(private(VehicleListLoader))
            .revalidate(Revalidate::OnKeyChange(vehicle_list_key)),
        RouteDescriptor::page(RouteId::VehicleDetails, "/vehicles/:id")
            .parent(RouteId::Vehicles)
            .loader(private(VehicleLoader)),
        RouteDescriptor::page(RouteId::DestroyVehicle, "/vehicles/:id/destroy")
            .parent(RouteId::Root)
            .action(DestroyVehicleAction),
        RouteDescriptor::page(RouteId::AddVehicle, "/add")
            .parent(RouteId::Root)
            .loader(private(AddFormLoader))
            .action(CreateVehicleAction),
        RouteDescriptor::page(RouteId::Login, "/login").action(LoginAction),
        RouteDescriptor::page(RouteId::NotFound, "*"),
    ]
}

/// A router over [`app_routes`].
pub fn app_router(ctx: RouteContext) -> Router {
    Router::new(app_routes(), ctx)
}
