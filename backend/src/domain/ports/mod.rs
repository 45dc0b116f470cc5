//! Domain ports for the hexagonal boundary.

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
