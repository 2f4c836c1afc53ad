pub mod bindings;

pub use bindings::LaneBindings;
