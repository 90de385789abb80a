//! Page components for the Fieldwork gallery.

mod gallery;
mod sign_in;

pub use gallery::Gallery;
pub use sign_in::SignIn;
