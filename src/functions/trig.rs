use crate::functions::Registry;
use equation_macros::unary_fn;

pub fn register(registry: &mut Registry) {
    registry.register_function("sin", sin);
    registry.register_function("cos", cos);
    registry.register_function("tan", tan);
}

#[unary_fn]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[unary_fn]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

#[unary_fn]
pub fn tan(x: f64) -> f64 {
    x.tan()
}
