pub mod metadata;
pub mod platform;
pub mod serialization;
pub mod template;
pub mod warning;

pub use metadata::{
    ActivationTrigger, ContextMode, ExcludedAgent, ExecutionMode, HookBinding, Metadata,
    Permissions,
};
pub use platform::Platform;
pub use template::ParsedTemplate;
pub use warning::{TransformationResult, Warning, WarningCategory};
