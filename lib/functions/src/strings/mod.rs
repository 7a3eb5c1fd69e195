mod case;
mod concat;
mod contains;
mod encode_for_uri;
mod regex;
mod replace;
mod str_before_after;
mod str_ends;
mod str_len;
mod str_starts;
mod substr;

pub use case::*;
pub use concat::*;
pub use contains::*;
pub use encode_for_uri::*;
pub use self::regex::*;
pub use replace::*;
pub use str_before_after::*;
pub use str_ends::*;
pub use str_len::*;
pub use str_starts::*;
pub use substr::*;
