use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::gateway::Gateway;

/// A backend REST collection.
pub trait Resource: 'static {
    /// Collection path, e.g. `/api/customers`.
    const PATH: &'static str;
    type Item: DeserializeOwned + Serialize + Clone + 'static;
    type Payload: Serialize + 'static;
}

pub fn item_path(path: &str, id: &str) -> String {
    format!("{}/{}", path, id)
}

/// CRUD pass-through for one resource. Failures propagate unchanged.
pub struct ResourceClient<R> {
    gateway: Gateway,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            _resource: PhantomData,
        }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub async fn get_all(&self) -> Result<Vec<R::Item>, ApiError> {
        self.gateway.get(R::PATH).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<R::Item, ApiError> {
        self.gateway.get(&item_path(R::PATH, id)).await
    }

    pub async fn create(&self, payload: &R::Payload) -> Result<R::Item, ApiError> {
        self.gateway.post(R::PATH, payload).await
    }

    pub async fn update(&self, id: &str, payload: &R::Payload) -> Result<R::Item, ApiError> {
        self.gateway.patch(&item_path(R::PATH, id), payload).await
    }

    /// Some endpoints answer 204, others echo the deleted row; both succeed.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.gateway
            .delete::<Value>(&item_path(R::PATH, id))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_id() {
        assert_eq!(item_path("/api/hsn-master", "12"), "/api/hsn-master/12");
    }
}
