pub mod check;
pub mod compile;
pub mod extend;
pub mod loader;
pub mod tree;
