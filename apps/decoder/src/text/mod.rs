//! Text primitives shared by the resume and role decoders.

pub mod extract;
pub mod normalize;
pub mod signals;

pub use extract::extract_bullets;
pub use normalize::{clean_line, normalize_line, normalize_text_line, BULLET_PREFIX};
