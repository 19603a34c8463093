pub mod digest;
pub mod envelope;
pub mod nugget;
pub mod page;

pub use digest::CaseDigest;
pub use envelope::{Envelope, EnvelopeError, Fetch};
pub use nugget::{AreaOfLaw, AreaOfLawTag, AreaRef, Judge, KeywordTag, KeywordValue, Nugget};
pub use page::Page;
