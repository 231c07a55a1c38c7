pub mod browse;
pub mod dispatch;
pub mod item;
pub mod lifecycle;
pub mod overview;
pub mod schema;
pub mod shared;
