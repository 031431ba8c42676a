pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use clients::AuthProviderClient;
pub use services::AuthService;
