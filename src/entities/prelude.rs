pub use super::companies::Entity as Companies;
pub use super::queues::Entity as Queues;
pub use super::user_queues::Entity as UserQueues;
pub use super::users::Entity as Users;
