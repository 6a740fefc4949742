mod profile;
pub use profile::*;

mod stats;
pub use stats::*;

mod games;
pub use games::*;

mod archives;
pub use archives::*;

mod clubs;
pub use clubs::*;

mod matches;
pub use matches::*;

mod tournaments;
pub use tournaments::*;
