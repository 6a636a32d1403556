use serde::{Deserialize, Serialize};

// Controls is the snapshot of held inputs the input collaborator refreshes
// before each tick; held state, not key events
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Controls {
    pub forward: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}
