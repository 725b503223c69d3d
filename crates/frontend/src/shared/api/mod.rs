pub mod error;
pub mod gateway;
pub mod resource;

pub use error::ApiError;
pub use gateway::{use_gateway, Gateway};
pub use resource::{Resource, ResourceClient};
