use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{internal::InternalError, AppError},
    middleware::auth::Role,
    model::user::CreateUserParams,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the bootstrap admin account when none exists.
///
/// A fresh deployment has no users at all, which would make every mutating
/// route unreachable. If no active admin account exists and
/// `ADMIN_USERNAME`/`ADMIN_PASSWORD` are configured, one is created at boot.
/// Does nothing when an admin already exists.
pub async fn ensure_admin_account(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        tracing::warn!(
            "No admin account exists and ADMIN_USERNAME/ADMIN_PASSWORD are not set; \
             all mutating routes will be unreachable"
        );
        return Ok(());
    };

    let password_hash =
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(InternalError::HashPassword)?;

    repo.create(CreateUserParams {
        username: username.clone(),
        password_hash,
        role: Role::Admin.as_str().to_string(),
    })
    .await?;

    tracing::info!("Created bootstrap admin account '{}'", username);

    Ok(())
}
