use std::collections::HashMap;

use anyhow::Context;
use auth::PasswordHasher;
use sqlx::PgPool;

use crate::authentication::models::Role;

/// A user created by the seed routine, with a known plaintext password.
#[derive(Debug, Clone, Copy)]
pub struct SeedUser {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

/// Test accounts for local development.
pub const DEFAULT_USERS: [SeedUser; 2] = [
    SeedUser {
        email: "admin@example.com",
        password: "admin123",
        role: Role::Admin,
    },
    SeedUser {
        email: "agent@example.com",
        password: "agent123",
        role: Role::FieldAgent,
    },
];

/// Replace all users and roles with every known role plus `users`.
///
/// Runs in a single transaction, so a failure leaves the previous data intact.
pub async fn seed_database(
    pool: &PgPool,
    hasher: &PasswordHasher,
    users: &[SeedUser],
) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM users").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM roles").execute(&mut *tx).await?;
    tracing::info!("Cleared existing users and roles");

    let mut role_ids = HashMap::new();
    for role in Role::ALL {
        let role_id: i64 =
            sqlx::query_scalar("INSERT INTO roles (role_name) VALUES ($1) RETURNING id")
                .bind(role.as_str())
                .fetch_one(&mut *tx)
                .await?;
        tracing::info!(role = %role, role_id, "Created role");
        role_ids.insert(role, role_id);
    }

    for user in users {
        let role_id = role_ids
            .get(&user.role)
            .copied()
            .with_context(|| format!("No role id for {}", user.role))?;
        let password_hash = hasher
            .hash(user.password)
            .with_context(|| format!("Failed to hash password for {}", user.email))?;

        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, password_hash, role_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.email)
        .bind(password_hash)
        .bind(role_id)
        .fetch_one(&mut *tx)
        .await?;
        tracing::info!(user_id, email = user.email, role = %user.role, "Created user");
    }

    tx.commit().await?;
    tracing::info!(roles = role_ids.len(), users = users.len(), "Seeding completed");

    Ok(())
}
