pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod label;
pub mod radio;
pub mod select;
pub mod textarea;

pub use badge::{Badge, StatusBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::{FileInput, Input};
pub use label::FieldLabel;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;
