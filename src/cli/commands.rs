pub mod check_login;
pub mod initdb;
pub mod list;
pub mod seed;

pub use check_login::check_login;
pub use initdb::init_database;
pub use list::list_accounts;
pub use seed::seed;
