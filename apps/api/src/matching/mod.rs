// Skill matching: normalization, gap analysis, course ranking, assessment.
// The core functions are pure and synchronous; handlers own all catalog access.

pub mod assessment;
pub mod gap;
pub mod handlers;
pub mod normalize;
pub mod recommend;
