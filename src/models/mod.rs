mod phase;
mod question;
mod tier;

pub use phase::{Direction, Phase};
pub use question::{AnswerRecord, Question};
pub use tier::{BadgePolicy, BadgeTier, GradeTier, SilverThreshold};
