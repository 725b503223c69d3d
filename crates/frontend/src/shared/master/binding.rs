//! Glue between a [`ResourceClient`] and the generic master screen.

use contracts::domain::common::Record;
use serde::de::DeserializeOwned;

use super::view_model::MasterCallbacks;
use crate::shared::api::{ApiError, Resource, ResourceClient};

/// Converts a form draft into the wire payload of a resource.
pub type PayloadMapper<P> = fn(&Record) -> Result<P, String>;

/// Decode a choice field (select or radio) into its typed value.
pub fn choice<T: DeserializeOwned>(draft: &Record, key: &str, label: &str) -> Result<T, String> {
    draft
        .parse(key)
        .ok_or_else(|| format!("{} is required", label))
}

fn to_records<T: serde::Serialize>(items: &[T]) -> Result<Vec<Record>, String> {
    items.iter().map(Record::from_serialize).collect()
}

fn api_message(error: ApiError) -> String {
    error.to_string()
}

/// Fetch/create/update/delete callbacks backed by `client`.
pub fn bind_resource<R: Resource>(
    client: ResourceClient<R>,
    to_payload: PayloadMapper<R::Payload>,
) -> MasterCallbacks {
    let fetch_client = client.clone();
    let create_client = client.clone();
    let update_client = client.clone();
    let delete_client = client;

    MasterCallbacks::new()
        .fetch(move || {
            let client = fetch_client.clone();
            async move {
                let items = client.get_all().await.map_err(api_message)?;
                to_records(&items)
            }
        })
        .create(move |draft: Record| {
            let client = create_client.clone();
            async move {
                let payload = to_payload(&draft)?;
                let created = client.create(&payload).await.map_err(api_message)?;
                Record::from_serialize(&created)
            }
        })
        .update(move |id: String, draft: Record| {
            let client = update_client.clone();
            async move {
                let payload = to_payload(&draft)?;
                let updated = client.update(&id, &payload).await.map_err(api_message)?;
                Record::from_serialize(&updated)
            }
        })
        .delete(move |id: String| {
            let client = delete_client.clone();
            async move { client.delete(&id).await.map_err(api_message) }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        id: String,
        name: String,
    }

    #[test]
    fn typed_items_become_records() {
        let rows = vec![Row { id: "1".into(), name: "Gold".into() }];
        let records = to_records(&rows).unwrap();
        assert_eq!(records, vec![Record::new().with("id", "1").with("name", "Gold")]);
    }

    #[test]
    fn choice_reports_missing_selection() {
        let draft = Record::new().with("mode", "PER_GRAM");
        let parsed: Result<String, String> = choice(&draft, "mode", "Charge mode");
        assert_eq!(parsed.as_deref(), Ok("PER_GRAM"));
        let missing: Result<String, String> = choice(&draft, "other", "Metal type");
        assert_eq!(missing, Err("Metal type is required".to_string()));
    }

    #[test]
    fn api_errors_keep_the_server_message() {
        let error = ApiError::Http { status: 400, message: "Name already exists".into() };
        assert_eq!(api_message(error), "Name already exists");
    }
}
