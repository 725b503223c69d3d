pub mod binding;
pub mod container;
pub mod form;
pub mod schema;
pub mod state;
pub mod table;
pub mod view_model;

pub use binding::{bind_resource, choice, PayloadMapper};
pub use container::MasterContainer;
pub use form::SchemaForm;
pub use schema::{nested, options_from, ColumnSchema, FieldKind, FieldOption, FieldSchema};
pub use state::{FormMode, MasterState};
pub use table::MasterTable;
pub use view_model::{MasterCallbacks, MasterViewModel};
