use crate::functions::Registry;
use equation_macros::unary_fn;

pub fn register(registry: &mut Registry) {
    registry.register_function("sqrt", sqrt);
    registry.register_function("exp", exp);
}

/// Square root; negative arguments yield `NaN`.
#[unary_fn]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[unary_fn]
pub fn exp(x: f64) -> f64 {
    x.exp()
}
