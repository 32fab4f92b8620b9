pub mod interval;
pub mod pay;

pub use interval::{
    Breakdown, Span, breakdown, clip_to_school_bounds, compute_instructional, elapsed_minutes,
    overlap_minutes,
};
pub use pay::{
    DEFAULT_BASE_RATE, FULL_DAY_MINUTES, PayPoint, apply_floor, compute_pay_point,
    compute_pay_rate,
};
