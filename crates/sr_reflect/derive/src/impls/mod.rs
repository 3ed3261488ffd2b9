// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod struct_kind;

mod auto_register;
mod collision_check;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use auto_register::get_auto_register_impl;
use collision_check::get_collision_check_impl;
use struct_kind::impl_struct;
