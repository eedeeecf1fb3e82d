pub mod rotator;
pub mod scheduler;
pub mod vanish;

pub use rotator::PlaceholderRotator;
pub use scheduler::{FrameId, Scheduler, TimerId};
pub use vanish::{AnimationState, FrameOutcome, VanishAnimator};
