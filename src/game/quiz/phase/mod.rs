mod feedback;
mod question;
mod results;

pub use self::feedback::*;
pub use self::question::*;
pub use self::results::*;
