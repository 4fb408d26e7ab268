//! Root of the SeaORM entity modules.
//! Only the user store is modelled here; every other table belongs to the
//! application that owns the database.

pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::user::Entity as User;
}
