pub mod document;
pub mod element;
pub mod validity;

pub use document::{Document, NodeId};
pub use element::Element;
pub use validity::ValidityState;
