//! One component per routed page.
//!
//! Page copy lives in `const` tables at the top of each module.

mod about;
mod contact;
mod drivers;
mod home;
mod not_found;
mod restaurants;

pub use about::About;
pub use contact::Contact;
pub use drivers::Drivers;
pub use home::Home;
pub use not_found::NotFound;
pub use restaurants::Restaurants;
