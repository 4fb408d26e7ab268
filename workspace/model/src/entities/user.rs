use sea_orm::entity::prelude::*;

/// A credentialed identity in the user store.
/// Mirrors the columns Django's `auth_user` keeps for login and roles.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    /// Argon2 PHC string, never the plaintext password.
    pub password: String,
    /// May access the administrative side of the application.
    pub is_staff: bool,
    /// Holds every permission without being granted them explicitly.
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Short role label used when listing accounts.
    pub fn role_label(&self) -> &'static str {
        if self.is_superuser {
            "superuser"
        } else if self.is_staff {
            "staff"
        } else {
            "regular"
        }
    }
}
