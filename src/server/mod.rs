pub mod app;
mod deserializers;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod routes;
mod serializers;
