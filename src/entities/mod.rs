pub mod prelude;

pub mod companies;
pub mod queues;
pub mod user_queues;
pub mod users;
