mod eligibility;
mod recipe;

pub use eligibility::{decide, make_static, rewrite, EligibilityDecider};
pub use recipe::{MethodChange, MethodOutcome, RecipeRun, StaticfierRecipe};
