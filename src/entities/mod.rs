pub mod prelude;

pub mod incidents;
