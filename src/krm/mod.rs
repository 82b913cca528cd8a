pub mod object;
pub mod resource_list;

pub use object::KubeObject;
pub use resource_list::{FunctionResult, ResourceList, Severity};
