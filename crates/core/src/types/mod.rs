//! Core types for the contact directory.

pub mod contact;
pub mod login;
pub mod profile;

pub use contact::{ContactDetailRecord, ContactListEntry, ContactUserRef};
pub use login::LoginIdentifier;
pub use profile::{NO_MOBILE_PHONE_FOUND, NO_PHONE_FOUND, ProfileProperty, PropertyBag, keys};
