//! # Anagrafe
//!
//! `anagrafe` is a small user-account service. It exposes a single GraphQL
//! endpoint for password-based `signup`/`login` and an identity query, backed
//! by a MongoDB `users` collection.
//!
//! ## Authentication
//!
//! Passwords are bcrypt-hashed (cost 10) before storage and never leave the
//! service. A successful `login` mints an HS256 JWT with a one hour expiry,
//! keyed by the process-wide `JWT_SECRET`; later requests may present it as
//! `Authorization: Bearer <token>` and `currentUser` resolves to the token's
//! subject.
//!
//! ## Schema publishing
//!
//! A companion binary, `publish_schema`, copies an updated schema description
//! over the deployed `schema.graphql` file. The running service does not
//! reload it; the new file takes effect on the next start.

pub mod anagrafe;
pub mod auth;
pub mod cli;
pub mod graphql;
pub mod publisher;
pub mod store;
