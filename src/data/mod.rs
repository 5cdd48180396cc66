pub mod annotation;
pub mod bounds;
pub mod export;
pub mod model;
pub mod numeric_field;
pub mod parameters;
pub mod points;
pub mod series;
pub mod session;
pub mod trace_look;
