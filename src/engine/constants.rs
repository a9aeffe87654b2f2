// Timing constants for the list engine

use std::time::Duration;

/// How long each node stays highlighted during a traversal
pub const TRAVERSE_STEP: Duration = Duration::from_millis(800);

/// How long a search hit stays highlighted before it is cleared automatically
pub const SEARCH_HIGHLIGHT: Duration = Duration::from_millis(3000);

/// Busy window held after an insert, delete or reverse
/// Gives the front end time to animate the change before accepting new input
pub const BUSY_WINDOW: Duration = Duration::from_millis(500);
