//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly. `diesel print-schema` regenerates this
//! from a live database.

diesel::table! {
    /// Animal records. `id` defaults to `gen_random_uuid()` (pgcrypto) and is
    /// constrained by `animals_pkey`.
    animals (id) {
        id -> Uuid,
        name -> Text,
        weight -> Int4,
        diet -> Text,
    }
}
