//! Route loaders. Each one is a single batch of API calls.

use async_trait::async_trait;
use fleet_shared::ChartType;

use crate::error::RouteError;
use crate::router::{
    CacheKey, Dashboard, FormOptions, Loader, LoaderData, Location, Outcome, Request,
    RouteContext,
};

/// Root layout: the signed-in user.
pub struct CurrentUserLoader;

#[async_trait]
impl Loader for CurrentUserLoader {
    async fn load(&self, ctx: &RouteContext, _request: &Request) -> Result<Outcome, RouteError> {
        let user = ctx.api.current_user().await?;
        Ok(Outcome::Data(LoaderData::User(user)))
    }
}

/// Summary plus the three charts, fetched together.
pub struct DashboardLoader;

#[async_trait]
impl Loader for DashboardLoader {
    async fn load(&self, ctx: &RouteContext, _request: &Request) -> Result<Outcome, RouteError> {
        let api = ctx.api.as_ref();
        let (summary, fuel_chart, oem_chart, year_chart) = futures::try_join!(
            api.summary(),
            api.chart(ChartType::FuelType),
            api.chart(ChartType::Oem),
            api.chart(ChartType::RegistrationYear),
        )?;

        Ok(Outcome::Data(LoaderData::Dashboard(Dashboard {
            summary,
            fuel_chart,
            oem_chart,
            year_chart,
        })))
    }
}

/// `page` and `q` from a list location, passed on without range checks.
/// Only an absent, empty or non-integer page reads as 1.
pub fn list_params(location: &Location) -> (i64, String) {
    let page = location
        .query("page")
        .and_then(|p| p.trim().parse::<i64>().ok())
        .unwrap_or(1);
    let query = location.query("q").unwrap_or_default().to_string();
    (page, query)
}

/// Cache key of the vehicle list: the effective `(page, q)`.
pub fn vehicle_list_key(request: &Request) -> CacheKey {
    let (page, query) = list_params(&request.location);
    CacheKey::new([("page", page.to_string()), ("q", query)])
}

pub struct VehicleListLoader;

#[async_trait]
impl Loader for VehicleListLoader {
    async fn load(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError> {
        let (page, query) = list_params(&request.location);
        let list = ctx.api.vehicles(page, &query).await?;
        Ok(Outcome::Data(LoaderData::Vehicles(list)))
    }
}

pub struct VehicleLoader;

#[async_trait]
impl Loader for VehicleLoader {
    async fn load(&self, ctx: &RouteContext, request: &Request) -> Result<Outcome, RouteError> {
        let id = request
            .param("id")
            .ok_or_else(|| RouteError::Failed("Missing vehicle id".to_string()))?;
        let vehicle = ctx.api.vehicle(id).await?;
        Ok(Outcome::Data(LoaderData::Vehicle(vehicle)))
    }
}

/// Select options for the add form.
pub struct AddFormLoader;

#[async_trait]
impl Loader for AddFormLoader {
    async fn load(&self, ctx: &RouteContext, _request: &Request) -> Result<Outcome, RouteError> {
        let api = ctx.api.as_ref();
        let (manufacturers, models, types, colors) =
            futures::try_join!(api.manufacturers(), api.models(), api.types(), api.colors())?;

        Ok(Outcome::Data(LoaderData::AddForm(FormOptions {
            manufacturers,
            models,
            types,
            colors,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        assert_eq!(list_params(&Location::parse("/vehicles")), (1, String::new()));
    }

    #[test]
    fn test_list_params_reads_page_and_query() {
        let location = Location::parse("/vehicles?page=3&q=land+rover");
        assert_eq!(list_params(&location), (3, "land rover".to_string()));
    }

    #[test]
    fn test_list_params_forwards_out_of_range_pages() {
        assert_eq!(list_params(&Location::parse("/vehicles?page=0")).0, 0);
        assert_eq!(list_params(&Location::parse("/vehicles?page=-2")).0, -2);
        assert_eq!(list_params(&Location::parse("/vehicles?page=")).0, 1);
        assert_eq!(list_params(&Location::parse("/vehicles?page=two")).0, 1);
    }

    #[test]
    fn test_list_key_ignores_path() {
        let list = Request::new(Location::parse("/vehicles?page=2&q=ford"), Default::default());
        let detail = Request::new(
            Location::parse("/vehicles/abc?page=2&q=ford"),
            Default::default(),
        );
        let other = Request::new(Location::parse("/vehicles?page=2&q=vw"), Default::default());

        assert_eq!(vehicle_list_key(&list), vehicle_list_key(&detail));
        assert_ne!(vehicle_list_key(&list), vehicle_list_key(&other));
    }
}
