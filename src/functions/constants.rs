use crate::functions::Registry;
use std::f64::consts;

pub fn register(registry: &mut Registry) {
    registry.register_constant("pi", consts::PI);
    registry.register_constant("e", consts::E);
}
