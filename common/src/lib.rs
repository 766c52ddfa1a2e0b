//! Types shared between the admin panel API and its operator tooling.
//!
//! Split the way the wire sees them: [`params`] holds the request bodies
//! clients send, [`views`] holds the response shapes they get back.

pub mod params;
pub mod views;
