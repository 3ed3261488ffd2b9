// -----------------------------------------------------------------------------
// Modules

mod field;
mod impl_reflect;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use field::Field;
pub use reflect::Reflect;
