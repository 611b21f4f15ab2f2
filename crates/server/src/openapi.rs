use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RentalDetailDoc {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub vehicle_address: Option<String>,
    pub file_name: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::list_users,
        crate::routes::users::login,
        crate::routes::users::get_by_email,
        crate::routes::users::update_profile,
        crate::routes::users::update_image,
        crate::routes::rentals::save,
        crate::routes::rentals::list,
    ),
    components(schemas(HealthResponse, UserDoc, RentalDetailDoc)),
    tags(
        (name = "health"),
        (name = "users", description = "Account registration, lookup and profile updates"),
        (name = "rentals", description = "Rental confirmations"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/users",
            "/userst",
            "/user/login/{email}/{password}",
            "/user/{email}",
            "/user/image/{email}",
            "/api/rentals/save",
            "/api/rentals",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
