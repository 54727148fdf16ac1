pub mod birth_date;
pub mod numerology;
pub mod planet;
pub mod weekday;

pub use birth_date::*;
pub use numerology::*;
pub use planet::*;
pub use weekday::*;
