pub mod holiday;
pub mod tenant_settings;
pub mod working_days;

pub use holiday::*;
pub use tenant_settings::*;
pub use working_days::*;
