/// Constants used throughout the ssm-env codebase
// Reference scheme
pub const SSM_SCHEME: &str = "ssm";
pub const SSM_REFERENCE_PREFIX: &str = "ssm:";

// Recognised query options of a reference
pub const OPTION_DEFAULT: &str = "default";
pub const OPTION_DESTINATION: &str = "destination";
pub const OPTION_TEMPLATE: &str = "template";
pub const OPTION_CHMOD: &str = "chmod";

// Environment variable names
pub const SSM_ENV_VERBOSE_VAR: &str = "SSM_ENV_VERBOSE";
pub const HOME_VAR: &str = "HOME";

// Name under which the raw value is exposed to templates
pub const TEMPLATE_VALUE_KEY: &str = "value";
