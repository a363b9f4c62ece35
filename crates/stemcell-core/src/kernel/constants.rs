/// Application name
pub const APP_NAME: &str = "stemcell";

/// Environment variable naming a default definition file
pub const DEFINITION_FILE_ENV: &str = "STEMCELL_DEFINITION";
