pub mod paths;
pub mod routes;
