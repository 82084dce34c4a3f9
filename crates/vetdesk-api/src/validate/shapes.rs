//! The declared request shapes, one per endpoint body.
//!
//! All shapes are strict: a payload key that is not declared here is itself
//! a validation error.

use std::sync::LazyLock;

use vetdesk_entity::user::Role;

use super::schema::{Field, Schema};

/// Shape of `POST /api/auth/login`.
pub static LOGIN: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        Field::string("email").email("Invalid email format"),
        Field::string("password").min_len(6, "Password must be at least 6 characters"),
    ])
    .strict()
});

/// Shape of `POST /api/users`.
pub static USER_CREATE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        Field::string("name"),
        Field::string("lastname"),
        Field::string("email").email("Invalid email format"),
        Field::string("address"),
        Field::number("phone")
            .int("Phone must be a whole number")
            .min(1_000_000_000, "Phone must be at least 10 digits")
            .max(9_999_999_999, "Phone must be at most 10 digits"),
        Field::string_array("roles")
            .non_empty("Roles must have at least one element")
            .one_of(Role::NAMES, "Role must be one of: admin, vet, owner"),
        Field::string("password").min_len(6, "Password must be at least 6 characters"),
    ])
    .strict()
});

/// Shape of `PUT /api/users/{id}`.
///
/// Deliberately has no password field: profile updates can never overwrite
/// the stored hash, and password changes use [`CHANGE_PASSWORD`].
pub static USER_UPDATE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        Field::string("name"),
        Field::string("lastname"),
        Field::string("email").email("Invalid email format"),
        Field::string("address"),
        Field::number("phone")
            .int("Phone must be a whole number")
            .min(1_000_000_000, "Phone must be at least 10 digits")
            .max(9_999_999_999, "Phone must be at most 10 digits"),
        Field::string_array("roles")
            .non_empty("Roles must have at least one element")
            .one_of(Role::NAMES, "Role must be one of: admin, vet, owner"),
    ])
    .strict()
});

/// Shape of `PUT /api/users/{id}/password`.
pub static CHANGE_PASSWORD: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        Field::string("current_password"),
        Field::string("new_password").min_len(6, "New password must be at least 6 characters"),
    ])
    .strict()
});

/// Shape of `POST /api/pets` and `PUT /api/pets/{id}`.
pub static PET: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        Field::string("name"),
        Field::string("species"),
        Field::string("breed"),
        Field::string("size"),
        Field::number("age")
            .int("Age must be an integer")
            .min(0, "Age must be a positive number"),
        Field::string("owner_id").uuid("Owner id must be a valid UUID"),
    ])
    .strict()
});

/// Shape of `POST /api/appointments` and `PUT /api/appointments/{id}`.
pub static APPOINTMENT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        Field::string("date").date("Date must be in YYYY-MM-DD format"),
        Field::string("time").time("Time must be in HH:MM:SS format"),
        Field::string("vet_id").uuid("Vet id must be a valid UUID"),
        Field::string("pet_id").uuid("Pet id must be a valid UUID"),
        Field::string("owner_id").uuid("Owner id must be a valid UUID"),
    ])
    .strict()
});
