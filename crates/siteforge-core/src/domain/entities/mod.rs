//! Domain entities: the data the two generation engines operate on.

pub mod artifact;
pub mod component;
pub mod design;
pub mod schema;
pub mod template;
pub mod theme;
