use std::fmt;

use chrono::Utc;
use model::entities::{prelude::User, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument, trace};

use crate::error::Result;
use crate::password::hash_password;

/// Role an account is provisioned with. Maps onto the staff and superuser flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Staff and superuser
    Superuser,
    /// Neither flag set
    Viewer,
}

impl Role {
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Superuser)
    }

    pub fn is_superuser(self) -> bool {
        matches!(self, Role::Superuser)
    }

    /// Name used in status lines, e.g. "Admin user created".
    pub fn account_label(self) -> &'static str {
        match self {
            Role::Superuser => "Admin",
            Role::Viewer => "Viewer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Role::Superuser => "Superuser (can upload data)",
            Role::Viewer => "Regular user (view only)",
        }
    }
}

/// Desired end state of one account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountSpec {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl AccountSpec {
    pub fn new(username: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// The two accounts every deployment is seeded with, in provisioning order.
pub fn default_accounts() -> [AccountSpec; 2] {
    [
        AccountSpec::new("admin", "admin@example.com", "admin123", Role::Superuser),
        AccountSpec::new("viewer", "viewer@example.com", "viewer123", Role::Viewer),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    Reset,
}

/// What happened to one account, with the credentials it now has.
#[derive(Clone, Debug)]
pub struct ProvisionReport {
    pub outcome: ProvisionOutcome,
    pub spec: AccountSpec,
    pub account: user::Model,
}

impl fmt::Display for ProvisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.spec.role.account_label();
        match self.outcome {
            ProvisionOutcome::Created => writeln!(f, "✅ {label} user created")?,
            ProvisionOutcome::Reset => {
                writeln!(f, "✅ {label} user already exists - resetting password")?
            }
        }
        writeln!(f, "   Username: {}", self.spec.username)?;
        writeln!(f, "   Password: {}", self.spec.password)?;
        write!(f, "   Role: {}", self.spec.role.description())
    }
}

/// Ensure an account with exactly the properties of `spec` exists.
///
/// A missing account is created; an existing one has its password, email and
/// role flags overwritten whatever their current values. Lookup and write
/// share one transaction.
#[instrument(skip(db, spec), fields(username = %spec.username))]
pub async fn provision_account(
    db: &DatabaseConnection,
    spec: &AccountSpec,
) -> Result<ProvisionReport> {
    trace!("Hashing password");
    let password_hash = hash_password(spec.password.clone()).await?;

    let txn = db.begin().await?;

    let existing = User::find()
        .filter(user::Column::Username.eq(spec.username.as_str()))
        .one(&txn)
        .await?;

    let (outcome, account) = match existing {
        Some(existing) => {
            debug!(id = existing.id, "Account exists, resetting credentials and flags");
            let mut active: user::ActiveModel = existing.into();
            active.email = Set(spec.email.clone());
            active.password = Set(password_hash);
            active.is_staff = Set(spec.role.is_staff());
            active.is_superuser = Set(spec.role.is_superuser());
            (ProvisionOutcome::Reset, active.update(&txn).await?)
        }
        None => {
            debug!("Account not found, creating it");
            let new_user = user::ActiveModel {
                username: Set(spec.username.clone()),
                email: Set(spec.email.clone()),
                password: Set(password_hash),
                is_staff: Set(spec.role.is_staff()),
                is_superuser: Set(spec.role.is_superuser()),
                is_active: Set(true),
                date_joined: Set(Utc::now()),
                ..Default::default()
            };
            (ProvisionOutcome::Created, new_user.insert(&txn).await?)
        }
    };

    txn.commit().await?;
    info!(id = account.id, ?outcome, "Account provisioned");

    Ok(ProvisionReport {
        outcome,
        spec: spec.clone(),
        account,
    })
}

/// Closing lines printed after every account was provisioned.
pub fn render_footer() -> String {
    format!("{}\n✅ User creation complete!\n", "=".repeat(50))
}
