pub mod use_notification;

pub use use_notification::*;
