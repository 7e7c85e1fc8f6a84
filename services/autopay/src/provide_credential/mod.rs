mod config;
pub use config::ConfigCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;

mod r#static;
pub use r#static::StaticCredentialProvider;
