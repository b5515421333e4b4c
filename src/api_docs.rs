use crate::api;
use crate::domain;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::welcome,
        api::health::health_check,
        api::suppliers::create_supplier,
        api::suppliers::list_suppliers,
        api::suppliers::get_supplier,
        api::compliance::check_compliance,
        api::compliance::get_insights,
    ),
    components(
        schemas(
            domain::Supplier,
            domain::NewSupplier,
            domain::NewComplianceRecord,
            api::health::MessageResponse,
            api::compliance::CheckComplianceResponse,
            api::compliance::SupplierInsightsResponse,
        )
    ),
    tags(
        (name = "supplier-compliance", description = "Supplier Compliance Monitor API")
    )
)]
pub struct ApiDoc;
