// Domain layer: cart model and the ports the cart talks through.

pub mod model;
pub mod ports;
