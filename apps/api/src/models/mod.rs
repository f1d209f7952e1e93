pub mod resume;

pub use resume::{Education, Experience, Skill};
