//! Tasks that edit JSON documents in place

pub mod path;
pub mod update;

pub use path::{PathSegment, PropertyPath};
pub use update::{UpdateJsonFileTask, UpdateRequest};
