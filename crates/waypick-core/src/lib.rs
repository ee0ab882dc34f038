pub mod command;
pub mod ident;
pub mod label;
pub mod path;
pub mod protocol;
pub mod record;
pub mod visibility;

pub use command::{InputEvent, Modifiers, PickCommand, WheelDirection, classify};
pub use ident::derive_id;
pub use label::{UNLABELED, effective_title, resolve_label};
pub use path::UiPath;
pub use record::ActionRecord;
pub use visibility::is_visible;
