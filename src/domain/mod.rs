// Domain layer: models and ports shared by the mediator and its colleagues.

pub mod model;
pub mod ports;
