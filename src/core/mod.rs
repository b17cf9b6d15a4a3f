// Core modules implementing the registry table, conversion pass, and error modeling.
pub mod convert;
pub mod error;
pub mod registry;
