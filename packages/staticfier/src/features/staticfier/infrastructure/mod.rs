mod member_reference_classifier;
mod modifier_rewriter;
mod self_reference_qualifier;
mod type_parameter_usage;

pub use member_reference_classifier::{
    find_instance_reference, is_instance_independent, references_instance_state,
};
pub use modifier_rewriter::with_static;
pub use self_reference_qualifier::qualify_self_references;
pub use type_parameter_usage::first_type_parameter_use;
