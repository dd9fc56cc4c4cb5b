pub mod health;
pub mod holidays;
pub mod tenant_settings;
pub mod working_days;
