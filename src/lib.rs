pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;
use infrastructure::order_repo::DieselOrderStore;

pub use db::{create_pool, DbPool};

pub type AppService = OrderService<DieselOrderStore>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::get_order,
        handlers::orders::place_order,
        handlers::order_lines::create_order_line,
        handlers::order_lines::update_order_line,
        handlers::shops::get_shopping_cart,
    ),
    components(schemas(
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateOrderLineSpec,
        handlers::orders::PlaceOrderRequest,
        handlers::orders::OrderResponse,
        handlers::orders::OrderLineResponse,
        handlers::order_lines::CreateOrderLineRequest,
        handlers::order_lines::UpdateOrderLineRequest,
        handlers::order_lines::OrderLineEnvelope,
    )),
    tags(
        (name = "orders", description = "Order lifecycle: direct creation and placement"),
        (name = "order-lines", description = "Cart line management"),
        (name = "shops", description = "Shop cart access"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let service: AppService = OrderService::new(DieselOrderStore::new(pool.clone()));
        App::new()
            .app_data(web::Data::new(service))
            .wrap(Logger::default())
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("/{id}", web::get().to(handlers::orders::get_order))
                    .route("/{id}/place", web::post().to(handlers::orders::place_order)),
            )
            .service(
                web::scope("/order-lines")
                    .route("", web::post().to(handlers::order_lines::create_order_line))
                    .route("/{id}", web::put().to(handlers::order_lines::update_order_line)),
            )
            .service(
                web::scope("/shops")
                    .route("/{id}/cart", web::get().to(handlers::shops::get_shopping_cart)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
